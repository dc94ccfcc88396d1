//! Built-in dataset the store starts from and resets to.

use crate::models::{
    About, Achievement, Certificate, Education, Experience, Highlights, Project, ProjectCategory,
    Skill, SkillCategory, SocialLinks,
};

const PROJECT_AI_BOT_IMAGE: &str = "/assets/project-ai-bot.jpg";
const PROJECT_ECOMMERCE_IMAGE: &str = "/assets/project-ecommerce.jpg";
const PROJECT_CHAT_IMAGE: &str = "/assets/project-chat.jpg";
const CERT_IMAGE: &str = "/assets/cert-aws.jpg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

pub fn about() -> About {
    About {
        bio: "Hey there! I'm Yash Trivedi, a passionate Full-Stack MERN Developer and AI \
              Integrator from Sitapur, Uttar Pradesh. I love building products that solve real \
              problems and make people's lives easier. When I'm not coding, you'll find me \
              exploring new technologies, contributing to open source, or enjoying a good cup \
              of chai."
            .to_string(),
        highlights: Highlights {
            years_of_experience: 3,
            projects_completed: 25,
            tech_focus: strings(&[
                "MERN Stack",
                "AI/ML Integration",
                "Cloud Architecture",
                "API Design",
            ]),
        },
        resume_url: some("/resume.pdf"),
    }
}

pub fn social_links() -> SocialLinks {
    SocialLinks {
        github: some("https://github.com/yashtrivedi"),
        linkedin: some("https://linkedin.com/in/yashtrivedi"),
        twitter: some("https://twitter.com/yashtrivedi"),
        email: "yash@example.com".to_string(),
        website: some("https://yashtrivedi.dev"),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "AI-Powered Code Review Bot".to_string(),
            description: "An intelligent GitHub bot that automatically reviews pull requests \
                          using GPT-4, providing suggestions and catching bugs before they reach \
                          production."
                .to_string(),
            long_description: some(
                "Built with Node.js, integrated with GitHub API, and powered by OpenAI GPT-4. \
                 Handles code analysis, security checks, and provides actionable feedback.",
            ),
            tech_stack: strings(&[
                "Node.js",
                "TypeScript",
                "OpenAI API",
                "GitHub API",
                "MongoDB",
            ]),
            github_url: some("https://github.com/yashtrivedi/code-review-bot"),
            live_url: some("https://codereviewbot.dev"),
            images: strings(&[PROJECT_AI_BOT_IMAGE]),
            category: ProjectCategory::Ai,
            featured: true,
            created_at: "2024-01-15".to_string(),
            updated_at: "2024-01-20".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "E-Commerce Platform".to_string(),
            description: "A full-featured e-commerce platform with real-time inventory, payment \
                          processing, and admin dashboard."
                .to_string(),
            long_description: None,
            tech_stack: strings(&["React", "Node.js", "MongoDB", "Stripe", "Redis"]),
            github_url: some("https://github.com/yashtrivedi/ecommerce"),
            live_url: some("https://shopease.demo"),
            images: strings(&[PROJECT_ECOMMERCE_IMAGE]),
            category: ProjectCategory::Fullstack,
            featured: true,
            created_at: "2023-11-10".to_string(),
            updated_at: "2024-01-05".to_string(),
        },
        Project {
            id: "3".to_string(),
            title: "Real-time Chat Application".to_string(),
            description: "Scalable chat application with video calling, file sharing, and \
                          end-to-end encryption."
                .to_string(),
            long_description: None,
            tech_stack: strings(&["React", "Socket.io", "WebRTC", "Express", "PostgreSQL"]),
            github_url: some("https://github.com/yashtrivedi/chatapp"),
            live_url: None,
            images: strings(&[PROJECT_CHAT_IMAGE]),
            category: ProjectCategory::Fullstack,
            featured: false,
            created_at: "2023-09-20".to_string(),
            updated_at: "2023-10-15".to_string(),
        },
        Project {
            id: "4".to_string(),
            title: "REST API Generator".to_string(),
            description: "CLI tool that generates production-ready REST APIs from database \
                          schemas with authentication and validation."
                .to_string(),
            long_description: None,
            tech_stack: strings(&["Node.js", "TypeScript", "Commander.js", "Handlebars"]),
            github_url: some("https://github.com/yashtrivedi/api-generator"),
            live_url: None,
            images: strings(&[PROJECT_AI_BOT_IMAGE]),
            category: ProjectCategory::Backend,
            featured: false,
            created_at: "2023-07-01".to_string(),
            updated_at: "2023-08-10".to_string(),
        },
    ]
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "1".to_string(),
            title: "AWS Solutions Architect Associate".to_string(),
            issuer: "Amazon Web Services".to_string(),
            issue_date: "2024-01-10".to_string(),
            image_url: CERT_IMAGE.to_string(),
            credential_url: some("https://aws.amazon.com/verify"),
            created_at: "2024-01-10".to_string(),
        },
        Certificate {
            id: "2".to_string(),
            title: "MongoDB Certified Developer".to_string(),
            issuer: "MongoDB University".to_string(),
            issue_date: "2023-11-15".to_string(),
            image_url: CERT_IMAGE.to_string(),
            credential_url: some("https://university.mongodb.com"),
            created_at: "2023-11-15".to_string(),
        },
        Certificate {
            id: "3".to_string(),
            title: "Meta Front-End Developer".to_string(),
            issuer: "Meta (Coursera)".to_string(),
            issue_date: "2023-08-20".to_string(),
            image_url: CERT_IMAGE.to_string(),
            credential_url: None,
            created_at: "2023-08-20".to_string(),
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            company: "TechCorp Solutions".to_string(),
            role: "Senior Full-Stack Developer".to_string(),
            start_date: "2023-06-01".to_string(),
            end_date: None,
            current: true,
            description: "Leading development of microservices architecture, mentoring junior \
                          developers, and implementing CI/CD pipelines. Reduced deployment time \
                          by 60% and improved system reliability."
                .to_string(),
            tech_stack: strings(&["React", "Node.js", "AWS", "Docker", "Kubernetes"]),
            logo: None,
            created_at: "2023-06-01".to_string(),
        },
        Experience {
            id: "2".to_string(),
            company: "StartupXYZ".to_string(),
            role: "Full-Stack Developer".to_string(),
            start_date: "2022-01-15".to_string(),
            end_date: some("2023-05-30"),
            current: false,
            description: "Built and maintained multiple web applications. Implemented real-time \
                          features using WebSockets and integrated third-party APIs."
                .to_string(),
            tech_stack: strings(&["React", "Express", "MongoDB", "Socket.io"]),
            logo: None,
            created_at: "2022-01-15".to_string(),
        },
        Experience {
            id: "3".to_string(),
            company: "Freelance".to_string(),
            role: "Web Developer".to_string(),
            start_date: "2021-03-01".to_string(),
            end_date: some("2021-12-31"),
            current: false,
            description: "Developed custom websites and web applications for various clients. \
                          Focused on responsive design and performance optimization."
                .to_string(),
            tech_stack: strings(&["HTML", "CSS", "JavaScript", "WordPress", "PHP"]),
            logo: None,
            created_at: "2021-03-01".to_string(),
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    use SkillCategory::*;

    let table: [(&str, SkillCategory, u8); 21] = [
        ("React", Frontend, 95),
        ("TypeScript", Frontend, 90),
        ("Next.js", Frontend, 85),
        ("Tailwind CSS", Frontend, 95),
        ("Vue.js", Frontend, 70),
        ("Node.js", Backend, 95),
        ("Express.js", Backend, 90),
        ("Python", Backend, 80),
        ("GraphQL", Backend, 85),
        ("MongoDB", Database, 95),
        ("PostgreSQL", Database, 85),
        ("Redis", Database, 80),
        ("Docker", Devops, 85),
        ("AWS", Devops, 80),
        ("CI/CD", Devops, 85),
        ("OpenAI API", Ai, 90),
        ("LangChain", Ai, 75),
        ("TensorFlow", Ai, 65),
        ("Git", Tools, 95),
        ("VS Code", Tools, 95),
        ("Figma", Tools, 70),
    ];

    table
        .iter()
        .enumerate()
        .map(|(i, (name, category, proficiency))| Skill {
            id: (i + 1).to_string(),
            name: name.to_string(),
            category: *category,
            proficiency: *proficiency,
            visible: true,
        })
        .collect()
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_string(),
            title: "Hackathon Winner - TechFest 2024".to_string(),
            description: "Won first place for building an AI-powered accessibility tool for \
                          visually impaired users."
                .to_string(),
            proof_url: some("https://techfest.com/winners"),
            date: "2024-01-20".to_string(),
            icon: None,
            created_at: "2024-01-20".to_string(),
        },
        Achievement {
            id: "2".to_string(),
            title: "Open Source Contributor".to_string(),
            description: "Contributed to major open-source projects including React and Node.js \
                          ecosystem tools."
                .to_string(),
            proof_url: None,
            date: "2023-12-01".to_string(),
            icon: None,
            created_at: "2023-12-01".to_string(),
        },
        Achievement {
            id: "3".to_string(),
            title: "1000+ GitHub Stars".to_string(),
            description: "Personal projects have collectively received over 1000 stars on GitHub."
                .to_string(),
            proof_url: some("https://github.com/yashtrivedi"),
            date: "2023-10-15".to_string(),
            icon: None,
            created_at: "2023-10-15".to_string(),
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            id: "1".to_string(),
            degree: "Bachelor of Technology in Computer Science".to_string(),
            institution: "ABC Institute of Technology".to_string(),
            location: "Lucknow, Uttar Pradesh".to_string(),
            start_year: "2018".to_string(),
            end_year: some("2022"),
            current: false,
            description: some(
                "Specialized in Software Engineering with focus on Web Technologies and AI.",
            ),
            grade: some("8.5 CGPA"),
        },
        Education {
            id: "2".to_string(),
            degree: "Higher Secondary (12th)".to_string(),
            institution: "XYZ Public School".to_string(),
            location: "Sitapur, Uttar Pradesh".to_string(),
            start_year: "2016".to_string(),
            end_year: some("2018"),
            current: false,
            description: None,
            grade: some("92%"),
        },
    ]
}
