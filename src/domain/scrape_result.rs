use serde::{Deserialize, Serialize};

/// Outcome the backend reports for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    #[serde(default)]
    pub url: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResult {
    pub fn emails(&self) -> &[String] {
        self.emails.as_deref().unwrap_or_default()
    }

    /// Emails that count towards totals; failed results contribute none.
    pub fn email_count(&self) -> usize {
        if self.success {
            self.emails().len()
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultStats {
    pub total_emails: usize,
    pub urls: usize,
    pub successful: usize,
}

/// The results currently displayed and eligible for export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<ScrapeResult>);

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ResultStats {
    pub fn of(results: &[ScrapeResult]) -> Self {
        ResultStats {
            total_emails: results.iter().map(ScrapeResult::email_count).sum(),
            urls: results.len(),
            successful: results.iter().filter(|r| r.success).count(),
        }
    }
}

impl From<Vec<ScrapeResult>> for ResultSet {
    fn from(value: Vec<ScrapeResult>) -> Self {
        ResultSet(value)
    }
}
