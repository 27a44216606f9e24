use crate::config::WidgetConfig;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use std::path::Path;

impl WidgetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未提供的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${QUOTE_API_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("notice_clear_ms", self.notice_clear_ms, 1)?;

        let e = &self.elements;
        let required = [
            ("elements.location", &e.location),
            ("elements.cameras", &e.cameras),
            ("elements.resolution", &e.resolution),
            ("elements.difficulty", &e.difficulty),
            ("elements.name", &e.name),
            ("elements.email", &e.email),
            ("elements.phone", &e.phone),
            ("elements.service", &e.service),
            ("elements.message", &e.message),
            ("elements.total_price", &e.total_price),
            ("elements.camera_cost", &e.camera_cost),
            ("elements.labor_cost", &e.labor_cost),
            ("elements.travel_fee", &e.travel_fee),
            ("elements.price_result", &e.price_result),
            ("elements.form_message", &e.form_message),
        ];
        for (field, id) in required {
            validate_non_empty_string(field, id)?;
        }

        if let Some(id) = &e.total_price_secondary {
            validate_non_empty_string("elements.total_price_secondary", id)?;
        }
        if let Some(id) = &e.camera_count_display {
            validate_non_empty_string("elements.camera_count_display", id)?;
        }

        Ok(())
    }
}

impl Validate for WidgetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
