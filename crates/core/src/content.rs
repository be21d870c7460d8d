//! Static content store: everything the page displays, fixed at authoring
//! time. No mutation, no I/O — the renderer only ever reads from here.

use serde::Serialize;

/// A named, ordered group of skill labels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

/// Hero, about, and contact copy plus the outbound links.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub portrait_path: &'static str,
    pub school: &'static str,
    pub degree: &'static str,
    pub graduation: &'static str,
    pub focus_areas: &'static [&'static str],
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_handle: &'static str,
    pub email: &'static str,
    pub contact_blurb: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Read-only collection of all page content.
#[derive(Debug, Clone, Copy)]
pub struct ContentStore {
    profile: Profile,
    skills: &'static [SkillCategory],
    projects: &'static [Project],
    experience: &'static [ExperienceEntry],
}

impl ContentStore {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &'static [SkillCategory] {
        self.skills
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn experience(&self) -> &'static [ExperienceEntry] {
        self.experience
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self {
            profile: PROFILE,
            skills: SKILLS,
            projects: PROJECTS,
            experience: EXPERIENCE,
        }
    }
}

const PROFILE: Profile = Profile {
    name: "My Phuong Ly",
    tagline: "Computer Science student at UGA crafting intuitive web \
              experiences with React, Python, and modern technologies",
    portrait_path: "assets/headshot.jpg",
    school: "University of Georgia",
    degree: "B.S. Computer Science",
    graduation: "Expected May 2026",
    focus_areas: &[
        "Full-Stack Web Development",
        "UI/UX Design & Implementation",
        "Healthcare Technology",
        "AI Integration",
    ],
    github_url: "https://github.com/pml73790",
    github_handle: "pml73790",
    linkedin_url: "https://www.linkedin.com/in/my-phuong-ly",
    linkedin_handle: "my-phuong-ly",
    email: "lyphuongmy03@gmail.com",
    contact_blurb: "I'm always interested in hearing about new opportunities \
                    and collaborations",
};

const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "languages",
        items: &["Java", "Python", "HTML", "CSS", "JavaScript", "TypeScript"],
    },
    SkillCategory {
        name: "frameworks",
        items: &["React", "Node.js", "JavaFX"],
    },
    SkillCategory {
        name: "tools",
        items: &["Git/GitHub", "Docker", "Figma", "VS Code", "Maven"],
    },
    SkillCategory {
        name: "databases",
        items: &["MySQL", "MongoDB"],
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Simply Cinema",
        period: "September 2025 - Present",
        description: "Full-stack e-booking system with real-time seat \
                      selection, personalized dashboards, and secure payment \
                      workflows",
        tech: &["React.js", "Node.js", "Python", "Java", "Figma"],
        highlights: &[
            "Real-time seat selection",
            "Admin dashboards",
            "Secure payments",
        ],
    },
    Project {
        title: "FinChat",
        period: "February 2025",
        description: "AI-powered financial tracking website with personalized \
                      advice, built during UGA Hacks X hackathon",
        tech: &["JavaScript", "Python", "MongoDB", "Tailwind", "Figma"],
        highlights: &[
            "AI chatbot integration",
            "Real-time recommendations",
            "Secure data storage",
        ],
    },
    Project {
        title: "Geography Quiz",
        period: "July 2024",
        description: "Interactive quiz application with randomized questions, \
                      score tracking, and intuitive UI",
        tech: &["Java", "JavaFX", "Maven", "Apache Commons CSV"],
        highlights: &[
            "Score persistence",
            "Dynamic question loading",
            "Clean UI design",
        ],
    },
];

const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Frontend Developer Intern",
        company: "Altheros Capital",
        period: "September 2024 - Present",
        description: "Developing responsive web app for Midwest Health \
                      Hospital focused on patient care and clinical workflows",
        achievements: &[
            "Built user-centric features for patients with anxiety and PTSD",
            "Ensured scalability and cross-device optimization",
            "Implemented secure, HIPAA-compliant solutions",
        ],
    },
    ExperienceEntry {
        role: "Hackathon Participant",
        company: "UGA Hacks X",
        period: "February 2025",
        description: "Collaborated on personalized financial web app with AI \
                      chatbot during 24+ hour hackathon",
        achievements: &[
            "Designed wireframes and UX prototypes in Figma",
            "Won Truist Bank's Hyper-Personalization challenge",
            "Delivered working prototype in under 24 hours",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_shape() {
        let store = ContentStore::default();
        assert_eq!(store.skills().len(), 4);
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.experience().len(), 2);
    }

    #[test]
    fn skill_categories_keep_authoring_order() {
        let names: Vec<&str> = ContentStore::default()
            .skills()
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["languages", "frameworks", "tools", "databases"]);
    }

    #[test]
    fn every_record_is_fully_populated() {
        let store = ContentStore::default();
        for project in store.projects() {
            assert!(!project.tech.is_empty(), "{} has no tech", project.title);
            assert!(
                !project.highlights.is_empty(),
                "{} has no highlights",
                project.title
            );
        }
        for entry in store.experience() {
            assert!(
                !entry.achievements.is_empty(),
                "{} has no achievements",
                entry.role
            );
        }
    }

    #[test]
    fn mailto_link_targets_profile_email() {
        let store = ContentStore::default();
        assert_eq!(
            store.profile().mailto(),
            "mailto:lyphuongmy03@gmail.com"
        );
    }
}
