use askama::Template;

use crate::{
    domain::{Notification, Tab},
    services::ClientSnapshot,
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub single_active: bool,
    pub multiple_active: bool,
    pub loading_single: bool,
    pub loading_multiple: bool,
    pub exporting: bool,
    pub export_visible: bool,
    pub results_html: Option<String>,
    pub notifications: Vec<Notification>,
}

impl From<ClientSnapshot> for IndexTemplate {
    fn from(value: ClientSnapshot) -> Self {
        Self {
            single_active: value.active_tab == Tab::Single,
            multiple_active: value.active_tab == Tab::Multiple,
            loading_single: value.loading_single,
            loading_multiple: value.loading_multiple,
            exporting: value.exporting,
            export_visible: value
                .panel
                .as_ref()
                .is_some_and(|panel| panel.export_enabled),
            results_html: value.panel.as_ref().map(|panel| panel.to_html()),
            notifications: value.notifications,
        }
    }
}
