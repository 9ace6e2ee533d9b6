//! Portfolio content. Compile-time constant, no write path.

use super::aggregate::{
    Education, Experience, Organization, PersonalInfo, PortfolioRecord, Project,
};
use crate::shared::assets::AssetRef;

pub static PORTFOLIO: PortfolioRecord = PortfolioRecord {
    personal: PersonalInfo {
        name: "Tino Dewa Anggara",
        title: "Mobile Application Developer",
        email: "tinodewaanggara@gmail.com",
        phone: "+6282143440485",
        whatsapp: "https://wa.me/6282143440485",
        linkedin: "https://www.linkedin.com/in/tinoanggara",
        website: "https://tino-anggara.vercel.app/",
        github: "https://github.com/tinodewa",
        short_intro: "Mobile Application Developer specializing in Android Jetpack and Flutter, \
            ensuring consistent user experiences across platforms.",
        full_summary: "Mobile Application Developer with a Bachelor of Informatics Engineering \
            and professional experience spanning the full development lifecycle, from design \
            concepts to production releases. I specialize in building robust applications using \
            both Android Jetpack and Flutter. Combining strong analytical skills with a certified \
            background in Multi-Platform and Back-End Development, I apply SOLID principles to \
            prioritize clean code, modular architecture, and efficient state management to \
            create scalable solutions in collaborative team environments.",
    },
    skills: &[
        "Kotlin (Native, Jetpack Compose)",
        "Java (Native)",
        "Dart (Flutter)",
        "XML",
        "Android Studio",
        "VSCode",
        "Firebase",
        "TensorFlow",
        "Sentry",
        "Git",
        "Postman",
        "SQLite",
    ],
    experience: &[
        Experience {
            company: "Venturo Pro",
            role: "Mobile Developer",
            period: "March 2025 - Present",
            details: &[
                "Built responsive, declarative user interfaces using Jetpack Compose to improve maintainability and performance.",
                "Developed custom camera modules using CameraX, ensuring high-quality image capture across diverse hardware.",
                "Integrated TensorFlow Lite (TFLite) for low-latency, on-device inference.",
                "Collaborated with back-end teams to design unified data models across Android, iOS, and Web.",
            ],
        },
        Experience {
            company: "Venturo Pro",
            role: "Flutter Developer Internship",
            period: "October 2024 - January 2025",
            details: &[
                "Transformed UI/UX designs into responsive Flutter widgets.",
                "Implemented complex logic for production-ready releases.",
                "Prioritized clean code and modular folder organization utilizing GetX for state management.",
                "Streamlined data flow by efficiently consuming RESTful APIs using Dio/HTTP.",
            ],
        },
        Experience {
            company: "Dicoding Indonesia",
            role: "Merdeka Certified Independent Studies - Multi-Platform & Back-End",
            period: "August 2022 - December 2022",
            details: &[
                "Developed and enhanced existing web-based systems using CodeIgniter.",
                "Integrated VClaim BPJS bridging for seamless connectivity with health insurance services.",
                "Maintained web-based systems to ensure optimal performance.",
            ],
        },
        Experience {
            company: "Illiyin Studio",
            role: "Android Developer",
            period: "July 2020 - March 2022",
            details: &[
                "Transformed high-fidelity designs into responsive and interactive Android interfaces.",
                "Partnered with senior engineers to integrate RESTful APIs.",
                "Proactively identified and resolved critical bugs to enhance application speed.",
            ],
        },
    ],
    education: Education {
        school: "Sekolah Tinggi Informatika & Komputer Indonesia (STIKI)",
        degree: "Bachelor Degree",
        major: "Computer Science",
        period: "2020 - 2024",
        gpa: "3.64/4.00",
    },
    organization: &[
        Organization {
            name: "STIKI Basketball Society Team",
            role: "General Chairman",
            period: "April 2023 - May 2024",
            description: &[
                "Directed the student activity unit and managed board members.",
                "Acted as primary liaison between students and campus institutions.",
                "Managed comprehensive budgets and assisted in drafting formal proposals.",
            ],
        },
        Organization {
            name: "STIKI Basketball League",
            role: "Person-in-Charge of Equipment",
            period: "September 2023 - February 2024",
            description: &[
                "Led equipment team in managing technical assets for a large-scale league.",
                "Liaised with local authorities for security permits.",
                "Established systematic processes for resource distribution.",
            ],
        },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Sequre Product Authentication App",
            description: "A specialized security project designed for product authentication, \
                integrating high-speed hardware scanning with machine learning. Features instant \
                QR code scanning, counterfeit detection using TensorFlow Lite, and suspicious \
                item flagging.",
            tech_stack: &["Android Studio", "Kotlin", "TensorFlow", "SQLite", "Postman"],
            icon: AssetRef::new("/sequre.png"),
        },
        Project {
            id: 2,
            title: "Kiosk-Based Service Application",
            description: "A specialized hardware-software solution for public-facing terminals. \
                Features high-performance image capture using Camera2/CameraX, touch-screen \
                navigation, background task scheduling with WorkManager, and automated service \
                workflows.",
            tech_stack: &["Android Studio", "Kotlin", "Firebase", "CameraX", "SQLite"],
            icon: AssetRef::new("/kiosk.png"),
        },
        Project {
            id: 3,
            title: "RT Online",
            description: "A community-focused management project to streamline residential \
                administration. Features citizen contribution management, cash flow monitoring, \
                real-time error monitoring with Sentry, and secure transaction approvals.",
            tech_stack: &["Flutter", "Dart", "GetX", "Sentry", "VSCode"],
            icon: AssetRef::new("/rt_online_icon.webp"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_shape() {
        assert_eq!(PORTFOLIO.skills.len(), 12);
        assert_eq!(PORTFOLIO.experience.len(), 4);
        assert_eq!(PORTFOLIO.organization.len(), 2);
        assert_eq!(PORTFOLIO.projects.len(), 3);
        assert_eq!(PORTFOLIO.experience[0].role, "Mobile Developer");
        assert_eq!(PORTFOLIO.experience[3].company, "Illiyin Studio");
    }

    #[test]
    fn test_project_ids_unique_and_ordered() {
        let ids: Vec<u32> = PORTFOLIO.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_tech_stack_order() {
        let rt = PORTFOLIO.project(3).unwrap();
        assert_eq!(rt.title, "RT Online");
        assert_eq!(rt.tech_stack, &["Flutter", "Dart", "GetX", "Sentry", "VSCode"]);
    }

    #[test]
    fn test_project_icons_resolve() {
        for project in PORTFOLIO.projects {
            assert!(project.icon.resolve("").is_ok(), "{}", project.icon);
        }
    }

    #[test]
    fn test_projects_listed_label() {
        assert_eq!(PORTFOLIO.projects_listed_label(), "3 Projects Listed");
        assert!(PORTFOLIO.project(42).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PORTFOLIO).unwrap();
        assert_eq!(json["personal"]["shortIntro"], PORTFOLIO.personal.short_intro);
        assert_eq!(json["projects"][0]["techStack"][2], "TensorFlow");
        assert_eq!(json["projects"][2]["icon"], "/rt_online_icon.webp");
    }
}
