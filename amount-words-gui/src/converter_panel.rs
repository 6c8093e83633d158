//! 金额转换面板

use amount_words_core::{parse_amount, AmountWordsConfig, Converter, Currency, Language};
use eframe::egui;

/// 输入无法解析时的提示
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid number format.";

pub struct ConverterPanel {
    /// 金额输入
    amount_text: String,
    language: Language,
    currency: Currency,
    /// 转换结果或错误信息
    output: String,
}

impl ConverterPanel {
    pub fn new(config: &AmountWordsConfig) -> Self {
        let converter = Converter::from_config(&config.converter);
        Self {
            amount_text: String::new(),
            language: converter.language(),
            currency: converter.currency(),
            output: String::new(),
        }
    }

    pub fn apply_to_config(&self, config: &mut AmountWordsConfig) {
        config.converter.default_language = self.language;
        config.converter.default_currency = self.currency;
    }

    /// 执行转换，输入无效时不调用转换器
    fn convert(&mut self) {
        self.output = match parse_amount(&self.amount_text) {
            Ok(amount) => Converter::new(self.language, self.currency)
                .convert(amount)
                .unwrap_or_else(|e| e.to_string()),
            Err(_) => INVALID_NUMBER_MESSAGE.to_string(),
        };
    }

    /// 渲染 UI，返回选项是否被修改
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut modified = false;

        ui.add_space(4.0);
        ui.heading(egui::RichText::new("Amount to words").size(18.0).strong());
        ui.add_space(2.0);
        ui.separator();
        ui.add_space(8.0);

        egui::Grid::new("converter_grid")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .min_col_width(90.0)
            .show(ui, |ui| {
                ui.label("Amount");
                let response = ui.text_edit_singleline(&mut self.amount_text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.convert();
                }
                ui.end_row();

                ui.label("Language");
                egui::ComboBox::from_id_salt("language_combo")
                    .selected_text(self.language.name())
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            if ui
                                .selectable_value(&mut self.language, language, language.name())
                                .changed()
                            {
                                modified = true;
                            }
                        }
                    });
                ui.end_row();

                ui.label("Currency");
                egui::ComboBox::from_id_salt("currency_combo")
                    .selected_text(self.currency.name())
                    .show_ui(ui, |ui| {
                        for currency in Currency::ALL {
                            if ui
                                .selectable_value(&mut self.currency, currency, currency.name())
                                .changed()
                            {
                                modified = true;
                            }
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button("Convert").clicked() {
            self.convert();
        }

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new(&self.output).size(15.0));
        });

        modified
    }
}
