//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cyberintel_client::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 分析 API 的基础地址
    pub api_base: String,
    /// 主题名（"dark" / "light"）
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl AppConfig {
    /// 主题索引（0 = Dark, 1 = Light），供 view 层使用
    pub fn theme_index(&self) -> u8 {
        match self.theme.as_str() {
            "light" => 1,
            _ => 0,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务：JSON 文件存放在用户配置目录下
pub struct LocalConfigService;

impl LocalConfigService {
    fn config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("cyberintel").join("config.json")
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config dir: {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.theme_index(), 0);
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let config = AppConfig {
            theme: "solarized".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.theme_index(), 0);
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();
        assert_eq!(config.theme_index(), 1);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
