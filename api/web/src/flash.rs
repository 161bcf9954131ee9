use actix_web::{cookie::Cookie, HttpRequest, HttpResponse};

pub const FLASH_COOKIE: &str = "flash";

const CONTACT_SENT: &str = "contact_sent";
const PROJECT_ADDED: &str = "project_added.";

/// One-shot success notice carried across a redirect. The cookie only holds
/// the kind, the text is rendered by the page that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    ContactSent,
    ProjectAdded(i64),
}

impl Flash {
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.cookie(FLASH_COOKIE)
            .and_then(|cookie| Self::decode(cookie.value()))
    }

    pub fn encode(&self) -> String {
        match self {
            Self::ContactSent => CONTACT_SENT.to_owned(),
            Self::ProjectAdded(id) => format!("{PROJECT_ADDED}{id}"),
        }
    }

    pub fn decode(value: &str) -> Option<Self> {
        if value == CONTACT_SENT {
            return Some(Self::ContactSent);
        }
        value
            .strip_prefix(PROJECT_ADDED)
            .and_then(|id| id.parse().ok())
            .map(Self::ProjectAdded)
    }

    /// `title` names the added project when it is still listed.
    pub fn message(&self, title: Option<&str>) -> String {
        match (self, title) {
            (Self::ContactSent, _) => "Thank you for your message!".to_owned(),
            (Self::ProjectAdded(_), Some(title)) => {
                format!("Project \"{title}\" added successfully!")
            }
            (Self::ProjectAdded(_), None) => "Project added successfully!".to_owned(),
        }
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, self.encode())
            .path("/")
            .http_only(true)
            .finish()
    }

    /// Expires the flash cookie on `res` once its message has been shown.
    pub fn clear(res: &mut HttpResponse) {
        let cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
        if let Err(err) = res.add_removal_cookie(&cookie) {
            pf_log::warn(None, format!("[ApiWebServer] Failed to clear flash: {err}"));
        }
    }
}
