use crate::data::site::CONTACT_INFO;

pub const COMPANY_NAME: &str = "Gishmo";
pub const COMPANY_TAGLINE: &str = "100% Done-For-You Social Media Content Production";
pub const COMPANY_DESCRIPTION: &str = "Professional social media content production including images and text, completely done for you.";
pub const COMPANY_FOUNDED: i32 = 2020;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // Trunk dev server
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://gishmo.com"
}

pub fn contact_href() -> String {
    format!("mailto:{}", CONTACT_INFO.email)
}
