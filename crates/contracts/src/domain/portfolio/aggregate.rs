use serde::Serialize;

use crate::shared::assets::AssetRef;

// ============================================================================
// Personal info
// ============================================================================

/// Owner of the portfolio: identity, contacts and the two intro texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub linkedin: &'static str,
    pub website: &'static str,
    pub github: &'static str,
    /// Shown in the hero card on the home view
    pub short_intro: &'static str,
    /// Shown in the "About Me" card
    pub full_summary: &'static str,
}

// ============================================================================
// Timeline entries
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub major: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
}

impl Organization {
    /// Subtitle line under the organization name: `"{role} • {period}"`.
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.role, self.period)
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Technology labels, rendered as badges in this exact order
    pub tech_stack: &'static [&'static str],
    pub icon: AssetRef,
}

impl Project {
    /// Placeholder text used when the project icon cannot be shown.
    ///
    /// First letter of up to the first two words, upper-cased; `"?"` when the
    /// title has no words.
    pub fn initials(&self) -> String {
        initials(self.title)
    }
}

pub fn initials(title: &str) -> String {
    let letters: String = title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

// ============================================================================
// Aggregate root
// ============================================================================

/// Everything the page renders. Lives in a `static` and is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioRecord {
    pub personal: PersonalInfo,
    pub skills: &'static [&'static str],
    pub experience: &'static [Experience],
    pub education: Education,
    pub organization: &'static [Organization],
    pub projects: &'static [Project],
}

impl PortfolioRecord {
    /// Counter shown next to the "Featured Projects" title.
    pub fn projects_listed_label(&self) -> String {
        format!("{} Projects Listed", self.projects.len())
    }

    /// Footer line: `"© {year} {name}."`.
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}.", year, self.personal.name)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("RT Online"), "RO");
        assert_eq!(initials("Kiosk-Based Service Application"), "KS");
        assert_eq!(initials("sequre"), "S");
        assert_eq!(initials("   "), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            crate::domain::portfolio::PORTFOLIO.copyright(2026),
            "© 2026 Tino Dewa Anggara."
        );
    }

    #[test]
    fn test_organization_subtitle() {
        let org = Organization {
            name: "Club",
            role: "Chairman",
            period: "2023 - 2024",
            description: &[],
        };
        assert_eq!(org.subtitle(), "Chairman • 2023 - 2024");
    }
}
