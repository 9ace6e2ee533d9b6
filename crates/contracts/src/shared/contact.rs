use crate::domain::portfolio::PersonalInfo;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    Github,
}

impl ContactKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Email => "mail",
            ContactKind::Phone => "phone",
            ContactKind::LinkedIn => "linkedin",
            ContactKind::Github => "github",
        }
    }
}

/// One entry of the contact grid on the home view.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub text: String,
    pub href: String,
}

impl ContactLink {
    /// External links open in a new tab and carry the external-link marker.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// Handle shown for a profile URL: the URL without scheme, `www.` and
/// trailing slash (`linkedin.com/in/...`).
pub fn display_handle(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .trim_end_matches('/')
}

/// Last path segment of a profile URL (`github.com/user` → `user`).
pub fn profile_name(url: &str) -> &str {
    let handle = display_handle(url);
    handle.rsplit('/').next().unwrap_or(handle)
}

/// Contact grid entries in display order: Email, Phone, LinkedIn, Github.
pub fn contact_links(personal: &PersonalInfo) -> [ContactLink; 4] {
    [
        ContactLink {
            kind: ContactKind::Email,
            label: "Email",
            text: personal.email.to_string(),
            href: format!("mailto:{}", personal.email),
        },
        ContactLink {
            kind: ContactKind::Phone,
            label: "Phone",
            text: personal.phone.to_string(),
            href: personal.whatsapp.to_string(),
        },
        ContactLink {
            kind: ContactKind::LinkedIn,
            label: "LinkedIn",
            text: display_handle(personal.linkedin).to_string(),
            href: personal.linkedin.to_string(),
        },
        ContactLink {
            kind: ContactKind::Github,
            label: "Github",
            text: profile_name(personal.github).to_string(),
            href: personal.github.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::PORTFOLIO;

    #[test]
    fn test_contact_links_order_and_text() {
        let links = contact_links(&PORTFOLIO.personal);
        let labels: Vec<&str> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Email", "Phone", "LinkedIn", "Github"]);

        assert_eq!(links[0].href, "mailto:tinodewaanggara@gmail.com");
        assert_eq!(links[1].text, "+6282143440485");
        assert_eq!(links[1].href, "https://wa.me/6282143440485");
        assert_eq!(links[2].text, "linkedin.com/in/tinoanggara");
        assert_eq!(links[3].text, "tinodewa");
    }

    #[test]
    fn test_external_flag() {
        let links = contact_links(&PORTFOLIO.personal);
        assert!(!links[0].is_external());
        assert!(links[1..].iter().all(ContactLink::is_external));
    }

    #[test]
    fn test_display_handle() {
        assert_eq!(display_handle("https://www.example.com/in/me/"), "example.com/in/me");
        assert_eq!(display_handle("http://example.com"), "example.com");
        assert_eq!(display_handle("example.com/x"), "example.com/x");
        assert_eq!(profile_name("https://github.com/someone/"), "someone");
    }
}
