//! Static page content: project catalogue and service list.

#[derive(Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: &'static str,
    /// One-line summary shown on the listing card.
    pub summary: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub technologies: &'static [&'static str],
    pub gallery_size: usize,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "cognxto",
        title: "Cognxto",
        subtitle: "AI-powered learning platform",
        category: "Web Development",
        summary: "AI-powered learning platform for students",
        description: "Cognxto is an innovative learning platform that uses artificial intelligence to personalize educational content for students. The platform adapts to each student's learning style and pace, providing customized resources and feedback.",
        challenge: "The main challenge was creating an algorithm that could effectively analyze student performance and adapt content accordingly, while maintaining an intuitive and engaging user interface.",
        solution: "We implemented a machine learning model that tracks user interactions and performance metrics to continuously refine the learning experience. The UI was designed with simplicity in mind, using subtle animations to guide users through the platform.",
        technologies: &["React", "Node.js", "TensorFlow", "MongoDB", "AWS"],
        gallery_size: 3,
    },
    Project {
        id: "musextreme",
        title: "MuseXTreme",
        subtitle: "Interactive music experience",
        category: "Mobile App",
        summary: "Interactive music experience application",
        description: "MuseXTreme is a mobile application that transforms how users interact with music. It combines visualization, touch interaction, and social features to create an immersive music experience.",
        challenge: "Creating a responsive audio visualization system that works across different devices while maintaining performance was the primary challenge.",
        solution: "We developed a custom WebGL-based visualization engine that adapts to device capabilities, with fallbacks for less powerful devices. The UI was designed to be intuitive and responsive across all screen sizes.",
        technologies: &["React Native", "WebGL", "Web Audio API", "Firebase", "Redux"],
        gallery_size: 3,
    },
    Project {
        id: "test",
        title: "Test Project",
        subtitle: "Experimental design concept",
        category: "UI/UX Design",
        summary: "Experimental design concept",
        description: "This experimental project explores new interaction paradigms for digital interfaces. It serves as a testing ground for innovative UI/UX concepts before implementing them in commercial projects.",
        challenge: "Balancing innovation with usability was the key challenge, as we wanted to push boundaries without sacrificing user experience.",
        solution: "We employed an iterative design process with frequent user testing to refine concepts. The final design incorporates motion design principles to create intuitive transitions between states.",
        technologies: &["Figma", "Framer", "HTML/CSS", "JavaScript", "GSAP"],
        gallery_size: 3,
    },
];

#[inline]
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Print Design",
        description: "Professional print design services including brochures, business cards, posters, and marketing materials.",
        features: ["Brand consistency", "High-resolution outputs", "Print-ready files", "Multiple format options"],
    },
    Service {
        title: "Web Design",
        description: "Custom website design and development with a focus on user experience, performance, and modern aesthetics.",
        features: ["Responsive layouts", "SEO optimization", "Fast loading times", "Content management systems"],
    },
    Service {
        title: "Mobile App Development",
        description: "Native and cross-platform mobile application development for iOS and Android devices.",
        features: ["Intuitive interfaces", "Performance optimization", "Cross-platform compatibility", "Ongoing support"],
    },
    Service {
        title: "Digital Marketing",
        description: "Strategic digital marketing services to increase your online presence and drive conversions.",
        features: ["Social media management", "Email campaigns", "Content strategy", "Analytics and reporting"],
    },
    Service {
        title: "Innovation Consulting",
        description: "Strategic innovation consulting to help businesses identify opportunities and implement new technologies.",
        features: ["Technology assessment", "Digital transformation", "Process optimization", "Innovation workshops"],
    },
];

pub const OWNER_NAME: &str = "Benedictus Sebastian Aria Pratama";
pub const OWNER_INTRO: &str = "Hello 👋 I'm Ben, a Digital Business & Innovation student at Tokyo International University.";
pub const OWNER_BIO: [&str; 2] = [
    "I'm passionate about creating digital experiences that combine innovative technology with thoughtful design. My background in Digital Business gives me a unique perspective on how technology can solve real-world problems.",
    "When I'm not coding or designing, you can find me exploring Tokyo, taking photographs, or learning about new technologies.",
];

/// `(label, value)` rows on the contact page.
pub const CONTACT_DETAILS: [(&str, &str); 3] = [
    ("Email", "contact@benedictus.com"),
    ("Phone", "+81 123 456 7890"),
    ("Location", "Tokyo, Japan"),
];
