//! amount-words 配置模块
//!
//! 统一的配置管理，从 ~/.config/amount-words/config.toml 加载

use crate::error::{AmountWordsError, AmountWordsResult};
use crate::words::{Currency, Language};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 转换器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// 默认输出语言
    pub default_language: Language,
    /// 默认货币
    pub default_currency: Currency,
}

/// amount-words 完整配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountWordsConfig {
    /// 转换器配置
    pub converter: ConverterConfig,
}

impl AmountWordsConfig {
    /// 加载配置文件
    pub fn load() -> AmountWordsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 从指定路径加载，文件不存在时使用默认配置
    pub fn load_from(path: &Path) -> AmountWordsResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AmountWordsError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            "加载配置成功: {:?} (language={}, currency={})",
            path,
            config.converter.default_language,
            config.converter.default_currency
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> AmountWordsResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> AmountWordsResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| AmountWordsError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> AmountWordsResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(AmountWordsError::ConfigDirUnavailable)?;

        Ok(config_dir.join("amount-words").join("config.toml"))
    }
}
