//! 自检面板

use amount_words_core::selftest;
use amount_words_core::{Currency, Language};
use eframe::egui;

pub struct SelfTestPanel {
    /// 运行哪种语言的用例
    language: Language,
    /// 报告文本
    results: String,
}

impl SelfTestPanel {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            results: String::new(),
        }
    }

    fn run_suite(&mut self, currency: Currency) {
        self.results = selftest::run_suite(self.language, currency).to_string();
    }

    fn run_all(&mut self) {
        let reports = selftest::run_all();
        self.results = format!(
            "--- Running All Automated Tests ---\n\n{}",
            selftest::render_reports(&reports)
        );
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading(egui::RichText::new("Automated tests").size(18.0).strong());
        ui.add_space(2.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("self_test_language")
                .selected_text(self.language.name())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(&mut self.language, language, language.name());
                    }
                });

            if ui.button("Test dollars").clicked() {
                self.run_suite(Currency::Dollar);
            }
            if ui.button("Test pesos").clicked() {
                self.run_suite(Currency::Peso);
            }
            if ui.button("Run all tests").clicked() {
                self.run_all();
            }
        });

        ui.add_space(8.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.results.as_str())
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(20),
            );
        });
    }
}
