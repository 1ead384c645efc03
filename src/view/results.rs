use crate::domain::{ResultStats, ScrapeResult};

/// Neutralizes markup in any user or backend supplied text before it is
/// spliced into HTML.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub value: usize,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCard {
    Emails {
        url: String,
        emails: Vec<String>,
        empty_text: &'static str,
    },
    Failed {
        url: Option<String>,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPanel {
    pub stats: Vec<StatCard>,
    pub cards: Vec<ResultCard>,
    pub export_enabled: bool,
}

pub fn display_single_result(result: &ScrapeResult) -> ResultsPanel {
    let stats = vec![
        StatCard {
            value: result.email_count(),
            label: "Emails Found",
        },
        StatCard {
            value: 1,
            label: "URL Scraped",
        },
    ];

    let card = if result.success {
        ResultCard::Emails {
            url: result.url.clone(),
            emails: result.emails().to_vec(),
            empty_text: "No emails found on this page",
        }
    } else {
        ResultCard::Failed {
            url: None,
            error: failure_message(result),
        }
    };

    ResultsPanel {
        stats,
        cards: vec![card],
        export_enabled: result.email_count() > 0,
    }
}

pub fn display_multiple_results(results: &[ScrapeResult]) -> ResultsPanel {
    let ResultStats {
        total_emails,
        urls,
        successful,
    } = ResultStats::of(results);

    let stats = vec![
        StatCard {
            value: total_emails,
            label: "Total Emails",
        },
        StatCard {
            value: urls,
            label: "URLs Processed",
        },
        StatCard {
            value: successful,
            label: "Successful",
        },
    ];

    let cards = results
        .iter()
        .map(|result| {
            if result.success {
                ResultCard::Emails {
                    url: result.url.clone(),
                    emails: result.emails().to_vec(),
                    empty_text: "No emails found",
                }
            } else {
                ResultCard::Failed {
                    url: Some(result.url.clone()),
                    error: failure_message(result),
                }
            }
        })
        .collect();

    ResultsPanel {
        stats,
        cards,
        export_enabled: total_emails > 0,
    }
}

pub fn show_error(message: &str) -> ResultsPanel {
    ResultsPanel {
        stats: vec![],
        cards: vec![ResultCard::Failed {
            url: None,
            error: message.to_string(),
        }],
        export_enabled: false,
    }
}

fn failure_message(result: &ScrapeResult) -> String {
    result
        .error
        .clone()
        .unwrap_or_else(|| "Unknown error".to_string())
}

impl ResultsPanel {
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        if !self.stats.is_empty() {
            html.push_str(r#"<div class="stats-row">"#);
            for stat in &self.stats {
                html.push_str(&format!(
                    r#"<div class="stat-card"><div class="number">{}</div><div class="label">{}</div></div>"#,
                    stat.value, stat.label
                ));
            }
            html.push_str("</div>");
        }

        for card in &self.cards {
            card.write_html(&mut html);
        }

        html
    }
}

impl ResultCard {
    fn write_html(&self, html: &mut String) {
        match self {
            ResultCard::Emails {
                url,
                emails,
                empty_text,
            } => {
                html.push_str(&format!(
                    r#"<div class="result-card"><h3>{}</h3><div class="result-category"><h4>Extracted Emails ({})</h4>"#,
                    escape_html(url),
                    emails.len()
                ));
                if emails.is_empty() {
                    html.push_str(&format!(r#"<p class="empty-results">{}</p>"#, empty_text));
                } else {
                    html.push_str(r#"<ul class="result-list">"#);
                    for email in emails {
                        html.push_str(&format!("<li>{}</li>", escape_html(email)));
                    }
                    html.push_str("</ul>");
                }
                html.push_str("</div></div>");
            }
            ResultCard::Failed { url: Some(url), error } => {
                html.push_str(&format!(
                    r#"<div class="result-card"><h3>{}</h3><div class="error">{}</div></div>"#,
                    escape_html(url),
                    escape_html(error)
                ));
            }
            ResultCard::Failed { url: None, error } => {
                html.push_str(&format!(r#"<div class="error">{}</div>"#, escape_html(error)));
            }
        }
    }
}
