use crate::domain::model::FieldSet;
use crate::utils::error::{FormError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref ENV_VAR_REGEX: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
}

impl FieldSet {
    /// 從 TOML 或 JSON 檔案載入欄位 (依副檔名判斷)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(FormError::ConfigError {
                message: format!(
                    "Unsupported input file extension: {}. Allowed extensions: toml, json",
                    other.unwrap_or("<none>")
                ),
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| FormError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        Ok(serde_json::from_str(&processed)?)
    }
}

/// 替換環境變數 (例如 ${PHONE}); 未設定的變數保留原樣
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_REGEX
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}
