use crate::domain::model::ExamMark;
use crate::utils::error::{MarksError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksFile {
    pub batch: Option<BatchInfo>,
    pub marks: Vec<ExamMark>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

impl MarksFile {
    /// 從 TOML 檔案載入成績批次
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MarksError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析成績批次
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MarksError::TomlParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證批次內容的合理性
    ///
    /// 分數不做範圍檢查，超出 0-100 的值照原樣保留。
    pub fn validate_config(&self) -> Result<()> {
        for (index, mark) in self.marks.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("marks[{}].student_id", index),
                mark.student_id(),
            )?;
            validation::validate_non_empty_string(
                &format!("marks[{}].subject_id", index),
                mark.subject_id(),
            )?;
        }
        Ok(())
    }

    /// 取得批次名稱
    pub fn batch_name(&self) -> Option<&str> {
        self.batch.as_ref().map(|b| b.name.as_str())
    }

    pub fn into_marks(self) -> Vec<ExamMark> {
        self.marks
    }
}

impl Validate for MarksFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
