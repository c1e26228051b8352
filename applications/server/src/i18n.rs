//! Language selection and UI strings
//!
//! The interface speaks Arabic or Hebrew. The choice travels in a `lang`
//! cookie; anything unrecognized falls back to the configured default.

use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use hamal_core::ReportStatus;
use std::convert::Infallible;

/// Name of the cookie carrying the language code
pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Arabic,
    Hebrew,
}

impl Language {
    /// ISO 639-1 code, also the cookie value
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Hebrew => "he",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Self::Arabic),
            "he" => Some(Self::Hebrew),
            _ => None,
        }
    }

    /// Both languages are written right to left
    #[must_use]
    pub fn direction(&self) -> &'static str {
        "rtl"
    }

    /// Read the language from a `Cookie` header value
    #[must_use]
    pub fn from_cookie_header(value: &str) -> Option<Self> {
        value
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == LANG_COOKIE)
            .and_then(|(_, code)| Self::from_code(code.trim()))
    }

    #[must_use]
    pub fn messages(&self) -> &'static Messages {
        match self {
            Self::Arabic => &ARABIC,
            Self::Hebrew => &HEBREW,
        }
    }
}

/// Language negotiated for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

#[async_trait]
impl FromRequestParts<AppState> for RequestLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let language = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(Language::from_cookie_header)
            .unwrap_or(state.default_language);

        Ok(Self(language))
    }
}

/// Every user-facing string, per language
#[derive(Debug)]
pub struct Messages {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub language_name: &'static str,
    pub home: &'static str,
    pub register: &'static str,
    pub add_report: &'static str,
    pub admin_panel: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub register_button: &'static str,
    pub bootstrap_hint: &'static str,
    pub report_title: &'static str,
    pub report_content: &'static str,
    pub send: &'static str,
    pub submitted: &'static str,
    pub approve: &'static str,
    pub reject: &'static str,
    pub status: &'static str,
    pub no_reports: &'static str,
    pub pending: &'static str,
    pub approved: &'static str,
    pub rejected: &'static str,
}

impl Messages {
    #[must_use]
    pub fn status_label(&self, status: ReportStatus) -> &'static str {
        match status {
            ReportStatus::Pending => self.pending,
            ReportStatus::Approved => self.approved,
            ReportStatus::Rejected => self.rejected,
        }
    }
}

static ARABIC: Messages = Messages {
    site_name: "HamalNews | حمّال نيوز",
    tagline: "منصة بلاغات المواطنين",
    language_name: "العربية",
    home: "الرئيسية",
    register: "تسجيل",
    add_report: "إضافة بلاغ",
    admin_panel: "لوحة الإدارة",
    username: "اسم المستخدم",
    password: "كلمة المرور",
    register_button: "تسجيل",
    bootstrap_hint: "أول حساب يتم تسجيله يصبح حساب الإدارة",
    report_title: "العنوان",
    report_content: "نص البلاغ",
    send: "إرسال",
    submitted: "تم الإرسال – بانتظار موافقة الأدمن",
    approve: "موافقة",
    reject: "رفض",
    status: "الحالة",
    no_reports: "لا توجد بلاغات بعد",
    pending: "قيد الانتظار",
    approved: "مقبول",
    rejected: "مرفوض",
};

static HEBREW: Messages = Messages {
    site_name: "HamalNews | חמאל ניוז",
    tagline: "פלטפורמת דיווחי אזרחים",
    language_name: "עברית",
    home: "דף הבית",
    register: "הרשמה",
    add_report: "הוספת דיווח",
    admin_panel: "לוח ניהול",
    username: "שם משתמש",
    password: "סיסמה",
    register_button: "הרשמה",
    bootstrap_hint: "החשבון הראשון שנרשם הופך לחשבון המנהל",
    report_title: "כותרת",
    report_content: "תוכן הדיווח",
    send: "שליחה",
    submitted: "נשלח – ממתין לאישור המנהל",
    approve: "אישור",
    reject: "דחייה",
    status: "סטטוס",
    no_reports: "אין דיווחים עדיין",
    pending: "ממתין",
    approved: "אושר",
    rejected: "נדחה",
};
