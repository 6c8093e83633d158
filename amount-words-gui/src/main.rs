//! amount-words 桌面界面
//!
//! 使用 egui 实现，包括：
//! - 金额转文字
//! - 自检用例运行

use amount_words_core::AmountWordsConfig;
use eframe::egui;

mod converter_panel;
mod self_test_panel;

use converter_panel::ConverterPanel;
use self_test_panel::SelfTestPanel;

fn main() -> eframe::Result {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([560.0, 400.0])
            .with_title("Amount to Words"),
        ..Default::default()
    };

    eframe::run_native(
        "Amount to Words",
        options,
        Box::new(|cc| Ok(Box::new(AmountWordsApp::new(cc)))),
    )
}

/// 主应用
struct AmountWordsApp {
    active_tab: Tab,
    config: AmountWordsConfig,
    converter_panel: ConverterPanel,
    self_test_panel: SelfTestPanel,
    /// 默认选项是否已修改
    config_modified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Convert,
    SelfTest,
}

impl AmountWordsApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // 加载配置
        let config = AmountWordsConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AmountWordsConfig::default()
        });

        Self {
            active_tab: Tab::Convert,
            converter_panel: ConverterPanel::new(&config),
            self_test_panel: SelfTestPanel::new(config.converter.default_language),
            config,
            config_modified: false,
        }
    }

    fn save_config(&mut self) {
        self.converter_panel.apply_to_config(&mut self.config);

        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        } else {
            self.config_modified = false;
            tracing::info!("Config saved successfully");
        }
    }
}

impl eframe::App for AmountWordsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 顶部菜单栏
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save defaults").clicked() {
                        self.save_config();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // 底部状态栏
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.config_modified {
                    ui.label("⚠ Defaults changed");
                } else {
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(self.config_modified, egui::Button::new("Save defaults"))
                        .clicked()
                    {
                        self.save_config();
                    }
                });
            });
        });

        // 左侧选项卡栏
        egui::SidePanel::left("tab_panel").min_width(120.0).show(ctx, |ui| {
            if ui
                .selectable_label(self.active_tab == Tab::Convert, "Convert")
                .clicked()
            {
                self.active_tab = Tab::Convert;
            }

            if ui
                .selectable_label(self.active_tab == Tab::SelfTest, "Self-test")
                .clicked()
            {
                self.active_tab = Tab::SelfTest;
            }
        });

        // 中央面板
        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            Tab::Convert => {
                if self.converter_panel.ui(ui) {
                    self.config_modified = true;
                }
            }
            Tab::SelfTest => self.self_test_panel.ui(ui),
        });
    }
}
