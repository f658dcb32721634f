use crossterm::style::Stylize;

use crate::domain::value_objects::StatusClass;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Healthy,
    Blocked,
    Failed,
    Warning,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Healthy) => theme::icons::HEALTHY,
            (true, Icon::Blocked) => theme::icons::BLOCKED,
            (true, Icon::Failed) => theme::icons::FAILED,
            (true, Icon::Warning) => theme::icons::WARNING,
            (false, Icon::Healthy) => theme::icons_ascii::HEALTHY,
            (false, Icon::Blocked) => theme::icons_ascii::BLOCKED,
            (false, Icon::Failed) => theme::icons_ascii::FAILED,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Healthy => theme::colors::SUCCESS,
            Icon::Blocked | Icon::Warning => theme::colors::WARNING,
            Icon::Failed => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

impl From<StatusClass> for Icon {
    fn from(status: StatusClass) -> Self {
        match status {
            StatusClass::Healthy => Icon::Healthy,
            StatusClass::Blocked => Icon::Blocked,
            StatusClass::Failed => Icon::Failed,
        }
    }
}
