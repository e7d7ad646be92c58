//! Portfolio content rendered by the section pages.

pub struct Statistic {
    pub icon: &'static str,
    pub label: &'static str,
    pub target: u32,
}

pub static STATISTICS: [Statistic; 4] = [
    Statistic { icon: "📚", label: "Years of Study", target: 3 },
    Statistic { icon: "💻", label: "Projects Built", target: 50 },
    Statistic { icon: "☕", label: "Cups of Coffee", target: 1337 },
    Statistic { icon: "🐛", label: "Bugs Squashed", target: 999 },
];

pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Label of the primary action button.
    pub demo_label: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        icon: "🎮",
        title: "Retro Arcade Hub",
        description: "A nostalgic gaming platform featuring classic arcade games built with modern web \
                      technologies. Includes multiplayer support and leaderboards.",
        tech: &["React", "Node.js", "Socket.io"],
        demo_label: "View Live",
    },
    Project {
        icon: "🤖",
        title: "AI Vision Assistant",
        description: "Computer vision application that helps identify objects and provides real-time \
                      assistance. Built with machine learning and optimized for mobile devices.",
        tech: &["Python", "TensorFlow", "OpenCV"],
        demo_label: "View Live",
    },
    Project {
        icon: "🏠",
        title: "Smart Home Controller",
        description: "IoT-based home automation system with voice control, mobile app integration, \
                      and energy monitoring capabilities.",
        tech: &["Arduino", "C++", "IoT"],
        demo_label: "View Demo",
    },
    Project {
        icon: "🌌",
        title: "Space Explorer VR",
        description: "Immersive VR experience that lets users explore distant galaxies and learn about \
                      space. Features realistic physics and stunning visuals.",
        tech: &["Unity", "C#", "VR"],
        demo_label: "Play Game",
    },
];

pub struct Skill {
    pub icon: &'static str,
    pub name: &'static str,
    /// Proficiency, percent.
    pub level: u8,
}

pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        icon: "💻",
        title: "Programming Languages",
        skills: &[
            Skill { icon: "🐍", name: "Python", level: 90 },
            Skill { icon: "⚡", name: "JavaScript", level: 85 },
            Skill { icon: "🔧", name: "C++", level: 80 },
            Skill { icon: "☕", name: "Java", level: 75 },
        ],
    },
    SkillCategory {
        icon: "🌐",
        title: "Web Technologies",
        skills: &[
            Skill { icon: "⚛️", name: "React", level: 88 },
            Skill { icon: "🟢", name: "Node.js", level: 82 },
            Skill { icon: "🎨", name: "CSS/SASS", level: 85 },
            Skill { icon: "🔥", name: "Firebase", level: 78 },
        ],
    },
    SkillCategory {
        icon: "🛠️",
        title: "Tools & Hardware",
        skills: &[
            Skill { icon: "🐙", name: "Git/GitHub", level: 85 },
            Skill { icon: "🔌", name: "Arduino", level: 75 },
            Skill { icon: "🐧", name: "Linux", level: 70 },
            Skill { icon: "🎮", name: "Unity", level: 80 },
        ],
    },
];

pub struct BlogPost {
    pub icon: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        icon: "🚀",
        date: "Dec 15, 2024",
        title: "Building My First Neural Network",
        excerpt: "Journey into the world of AI and machine learning, starting with a simple neural \
                  network that can recognize handwritten digits...",
        tags: &["AI", "Python", "TensorFlow"],
    },
    BlogPost {
        icon: "🎮",
        date: "Dec 10, 2024",
        title: "Creating Retro Games with Modern Tools",
        excerpt: "How I combined nostalgic 8-bit aesthetics with contemporary web technologies to \
                  create engaging browser-based games...",
        tags: &["GameDev", "JavaScript", "Canvas"],
    },
    BlogPost {
        icon: "🔧",
        date: "Dec 5, 2024",
        title: "IoT Adventures: Smart Home on a Budget",
        excerpt: "Building a comprehensive home automation system using Arduino, Raspberry Pi, and a \
                  lot of creativity (and coffee)...",
        tags: &["IoT", "Arduino", "Hardware"],
    },
];

pub struct SocialLink {
    pub icon: &'static str,
    pub title: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: "🐙", title: "GitHub", href: "https://github.com/digitalrebel" },
    SocialLink { icon: "💼", title: "LinkedIn", href: "https://linkedin.com/in/digitalrebel" },
    SocialLink { icon: "🐦", title: "Twitter", href: "#" },
    SocialLink { icon: "🎮", title: "Discord", href: "#" },
];

pub static INTERESTS: [&str; 5] = [
    "🎮 Building games that make people smile",
    "🤖 Creating AI that doesn't want to take over the world",
    "🔧 Hardware hacking and IoT adventures",
    "🌟 Open source contributions",
    "🎨 Digital art and creative coding",
];

/// Plain-text resume offered by the download buttons.
pub const RESUME_TEXT: &str = "\
DIGITAL REBEL - Computer Engineering Student

CONTACT:
Email: rebel@universe.com
GitHub: github.com/digitalrebel
LinkedIn: linkedin.com/in/digitalrebel

SKILLS:
- Python (90%)
- JavaScript (85%)
- C++ (80%)
- Java (75%)
- React (88%)
- Node.js (82%)

PROJECTS:
- Retro Arcade Hub
- AI Vision Assistant
- Smart Home Controller
- Space Explorer VR

EDUCATION:
Computer Engineering Student
Years of Study: 3+

STATS:
- 50+ Projects Built
- 1337 Cups of Coffee
- 999+ Bugs Squashed
";
