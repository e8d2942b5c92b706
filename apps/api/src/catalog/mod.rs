//! Static catalog: candidate career paths for the recommendation engine,
//! plus the browsable role library and skill categories the assessment UI
//! is built from. Loaded into the binary at compile time, read-only for the
//! lifetime of the process.

pub mod handlers;

use serde::Serialize;

/// A career path the fallback engine can rank. `keywords` are the skill
/// signature, `interests` the matching interest tags, `missing` the baseline
/// gap list used when the profile gives no signal of its own.
#[derive(Debug, Serialize)]
pub struct CandidateRole {
    pub role: &'static str,
    pub keywords: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub description: &'static str,
    pub missing: &'static [&'static str],
}

pub const CAREER_PATHS: &[CandidateRole] = &[
    CandidateRole {
        role: "Data Scientist",
        keywords: &[
            "Python", "Data Analysis", "Statistics", "SQL", "Machine Learning",
            "Deep Learning", "Pandas", "NumPy",
        ],
        interests: &["Data Analysis", "AI/ML", "Statistics"],
        description: "Analyze complex data to help organizations make better decisions.",
        missing: &["Big Data Tools (Spark)", "Cloud Data Warehousing"],
    },
    CandidateRole {
        role: "Frontend Developer",
        keywords: &[
            "React", "JavaScript", "HTML", "CSS", "TypeScript", "UI/UX Design",
            "Figma", "Redux",
        ],
        interests: &["Web Development", "UI/UX Design", "Mobile Development"],
        description: "Build interactive and responsive user interfaces for modern web applications.",
        missing: &["Webpack/Vite Config", "Accessibility Standards (WCAG)"],
    },
    CandidateRole {
        role: "Backend Engineer",
        keywords: &[
            "Node.js", "Python", "Java", "SQL", "NoSQL", "API", "Database", "Go",
            "Docker",
        ],
        interests: &["Web Development", "Cloud Computing", "System Design"],
        description: "Design and implement scalable server-side logic and database architecture.",
        missing: &["Microservices Patterns", "Message Queues (Kafka/RabbitMQ)"],
    },
    CandidateRole {
        role: "Full Stack Developer",
        keywords: &["React", "Node.js", "JavaScript", "SQL", "Mongo", "Express", "Next.js"],
        interests: &["Web Development", "Startup", "Product Development"],
        description: "Work across the entire stack from database to user interface.",
        missing: &["CI/CD Pipelines", "Advanced Security Practices"],
    },
    CandidateRole {
        role: "DevOps Engineer",
        keywords: &[
            "AWS", "Docker", "Kubernetes", "Linux", "CI/CD", "Terraform",
            "Cloud Computing", "Bash",
        ],
        interests: &["Cloud Computing", "DevOps", "Cybersecurity"],
        description: "Bridge the gap between development and operations with automation.",
        missing: &["Infrastructure as Code", "Site Reliability Engineering"],
    },
    CandidateRole {
        role: "Cybersecurity Analyst",
        keywords: &[
            "Network Security", "Linux", "Ethical Hacking", "Firewalls", "Python",
            "Cryptography",
        ],
        interests: &["Cybersecurity", "Network Security", "Privacy"],
        description: "Protect systems and networks from digital attacks.",
        missing: &["Penetration Testing Tools", "Compliance Standards (ISO/SOC2)"],
    },
    CandidateRole {
        role: "AI/ML Engineer",
        keywords: &[
            "Python", "TensorFlow", "PyTorch", "Machine Learning", "Deep Learning",
            "NLP", "Computer Vision",
        ],
        interests: &["AI/ML", "Robotics", "Data Science"],
        description: "Build and deploy intelligent models and systems.",
        missing: &["Model Deployment (MLOps)", "Edge AI Optimization"],
    },
    CandidateRole {
        role: "Cloud Architect",
        keywords: &["AWS", "Azure", "Cloud Computing", "System Design", "Networking", "Security"],
        interests: &["Cloud Computing", "System Architecture"],
        description: "Design and manage complex cloud computing strategies.",
        missing: &["Multi-Cloud Strategy", "Cost Optimization"],
    },
    CandidateRole {
        role: "Mobile App Developer",
        keywords: &["React Native", "Flutter", "iOS", "Android", "JavaScript", "Dart"],
        interests: &["Mobile Development", "App Design"],
        description: "Create seamless mobile experiences for iOS and Android.",
        missing: &["Native Module Bridging", "App Store Optimization"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Skill categories (assessment form)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Programming",
        skills: &["Python", "JavaScript", "Java", "C++", "SQL", "C", "Go"],
    },
    SkillCategory {
        category: "Web Technologies",
        skills: &["HTML", "CSS", "React", "Node.js", "TypeScript", "Next.js", "PHP"],
    },
    SkillCategory {
        category: "Data & Analytics",
        skills: &[
            "Excel", "Tableau", "Power BI", "Statistics", "R", "Big Data", "Pandas",
            "Matplotlib", "Seaborn", "Snowflake", "Databricks", "Apache Spark",
            "ETL Pipelines", "Data Visualization", "NoSQL", "Data Warehousing",
        ],
    },
    SkillCategory {
        category: "Cloud & DevOps",
        skills: &["AWS", "Azure", "Docker", "Kubernetes", "Git", "Terraform", "GCP"],
    },
    SkillCategory {
        category: "Security",
        skills: &[
            "Network Security", "Linux", "Penetration Testing", "SIEM Tools",
            "Firewalls", "Ethical Hacking",
        ],
    },
    SkillCategory {
        category: "AI/ML",
        skills: &[
            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "NLP",
            "Computer Vision", "LLMs", "Generative AI", "Prompt Engineering",
            "MLOps", "Scikit-Learn", "Keras", "Reinforcement Learning",
            "Vector Databases", "LangChain", "XGBoost",
        ],
    },
    SkillCategory {
        category: "Embedded & IoT",
        skills: &[
            "Arduino", "Raspberry Pi", "Microcontrollers", "MQTT", "Circuit Design",
            "RTOS", "Robotics",
        ],
    },
    SkillCategory {
        category: "Business & Design",
        skills: &["Figma", "Product Management", "Agile/Scrum", "Marketing", "User Research"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Role library (browsable role cards)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResource {
    pub name: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// A role card for the explore page. Only the two flagship roles carry the
/// extended overview/roadmap material.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCard {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub domain: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap8_week: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<&'static [RoleResource]>,
}

pub const ROLE_LIBRARY: &[RoleCard] = &[
    RoleCard {
        id: "da",
        name: "Data Analyst",
        icon: "📊",
        domain: "Data",
        description: "Transform data into insights to help organizations make better decisions.",
        skills: &["SQL", "Python", "Tableau", "Excel"],
        level: "Entry Level",
        overview: Some(
            "A Data Analyst collects, cleans, and interprets data sets to answer a question or solve a problem.",
        ),
        tools: Some(&["PostgreSQL", "Python (Pandas)", "PowerBI", "Jupyter Notebooks"]),
        roadmap8_week: Some(&[
            "Week 1-2: Advanced Excel and Statistics Fundamentals",
            "Week 3-4: SQL for Data Analysis (Joins, Aggregations, Window Functions)",
            "Week 5-6: Python for Data Analysis (Numpy, Pandas, Matplotlib)",
            "Week 7-8: Visualization & Storytelling with Tableau/PowerBI",
        ]),
        projects: Some(&[
            "Sales Dashboard for Retail Store",
            "E-commerce Customer Behavior Analysis",
        ]),
        resources: Some(&[
            RoleResource {
                name: "Google Data Analytics Professional Certificate",
                url: "https://www.coursera.org",
                kind: "cert",
            },
            RoleResource {
                name: "Alex The Analyst YouTube Channel",
                url: "https://youtube.com",
                kind: "video",
            },
        ]),
    },
    RoleCard {
        id: "wd",
        name: "Web Developer",
        icon: "🌐",
        domain: "Web",
        description: "Build and maintain websites using modern frontend and backend frameworks.",
        skills: &["HTML", "CSS", "JavaScript", "React"],
        level: "Entry Level",
        overview: Some(
            "Web developers use programming languages to create websites, from UI design to server-side logic.",
        ),
        tools: Some(&["VS Code", "Git", "Npm", "Chrome DevTools"]),
        roadmap8_week: Some(&[
            "Week 1-2: Advanced HTML/CSS & Responsive Design",
            "Week 3-4: Modern JavaScript (ES6+)",
            "Week 5-6: React Fundamentals & State Management",
            "Week 7-8: API Integration & Deployment",
        ]),
        projects: Some(&["Personal Portfolio Site", "E-commerce Product Catalog"]),
        resources: Some(&[
            RoleResource {
                name: "FreeCodeCamp Web Dev Guide",
                url: "https://freecodecamp.org",
                kind: "doc",
            },
            RoleResource {
                name: "Web Dev Simplified YouTube",
                url: "https://youtube.com",
                kind: "video",
            },
        ]),
    },
    RoleCard {
        id: "cyber",
        name: "Cybersecurity Analyst",
        icon: "🛡️",
        domain: "Security",
        description: "Protect networks and data from cyber threats and unauthorized access.",
        skills: &["Networking", "Linux", "Security Tools", "Encryption"],
        level: "Entry Level",
        overview: None,
        tools: None,
        roadmap8_week: None,
        projects: None,
        resources: None,
    },
    RoleCard {
        id: "cloud",
        name: "Cloud Engineer",
        icon: "☁️",
        domain: "Cloud",
        description: "Design and manage scalable infrastructure on cloud platforms like AWS and Azure.",
        skills: &["AWS", "Docker", "Kubernetes", "Linux"],
        level: "Mid Level",
        overview: None,
        tools: None,
        roadmap8_week: None,
        projects: None,
        resources: None,
    },
    RoleCard {
        id: "devops",
        name: "DevOps Engineer",
        icon: "♾️",
        domain: "Cloud",
        description: "Bridge the gap between development and operations for faster software delivery.",
        skills: &["CI/CD", "Jenkins", "Terraform", "Git"],
        level: "Mid Level",
        overview: None,
        tools: None,
        roadmap8_week: None,
        projects: None,
        resources: None,
    },
    RoleCard {
        id: "aiml",
        name: "AI/ML Engineer",
        icon: "🤖",
        domain: "AI/ML",
        description: "Build intelligent systems and predictive models using machine learning algorithms.",
        skills: &["Python", "TensorFlow", "PyTorch", "Math"],
        level: "Mid Level",
        overview: None,
        tools: None,
        roadmap8_week: None,
        projects: None,
        resources: None,
    },
    RoleCard {
        id: "uiux",
        name: "UI/UX Designer",
        icon: "🎨",
        domain: "Design",
        description: "Create intuitive and visually appealing user interfaces for digital products.",
        skills: &["Figma", "User Research", "Prototyping", "Adobe XD"],
        level: "Entry Level",
        overview: None,
        tools: None,
        roadmap8_week: None,
        projects: None,
        resources: None,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Per-field assessment options
// ────────────────────────────────────────────────────────────────────────────

pub const ALL_INTERESTS: &[&str] = &[
    "Data Analysis", "Web Development", "Mobile Development", "Cloud Computing",
    "Cybersecurity", "AI/ML", "DevOps", "Quality Assurance", "UI/UX Design",
    "Blockchain", "IoT", "Embedded Systems", "Robotics", "Product Management",
];

/// Interest tags shown for a given study field. Unknown fields get the full list.
pub fn interests_for_field(field: &str) -> &'static [&'static str] {
    match field {
        "CSE" => &[
            "Web Development", "Mobile Development", "Data Analysis", "Cloud Computing",
            "Cybersecurity", "AI/ML", "DevOps", "UI/UX Design", "Blockchain",
        ],
        "IT" => &[
            "Web Development", "Mobile Development", "Data Analysis", "Cloud Computing",
            "Cybersecurity", "DevOps", "Quality Assurance",
        ],
        "CS" => &["AI/ML", "Data Analysis", "Web Development", "Cybersecurity", "Blockchain"],
        "AIML" => &["AI/ML", "Data Analysis", "Robotics", "Web Development"],
        "DS" => &["Data Analysis", "AI/ML", "Cloud Computing"],
        "ECE" => &[
            "Embedded Systems", "IoT", "Robotics", "Data Analysis", "Cloud Computing",
            "Cybersecurity",
        ],
        "IOT" => &["IoT", "Embedded Systems", "Cloud Computing", "Cybersecurity", "DevOps"],
        "Mechanical" => &["Robotics", "Embedded Systems", "Data Analysis", "Product Management"],
        "Civil" => &["Data Analysis", "Product Management", "Web Development"],
        _ => ALL_INTERESTS,
    }
}

fn skill_category_names_for_field(field: &str) -> Option<&'static [&'static str]> {
    let names: &'static [&'static str] = match field {
        "CSE" => &["Programming", "Web Technologies", "Cloud & DevOps", "Security", "AI/ML"],
        "IT" => &["Programming", "Web Technologies", "Cloud & DevOps", "Security"],
        "CS" => &["Programming", "Web Technologies", "AI/ML", "Security"],
        "AIML" => &["Programming", "AI/ML", "Data & Analytics"],
        "DS" => &["Programming", "Data & Analytics", "AI/ML"],
        "ECE" => &["Programming", "Embedded & IoT", "Security", "Cloud & DevOps"],
        "IOT" => &["Programming", "Embedded & IoT", "Cloud & DevOps", "Security"],
        "Mechanical" => &["Data & Analytics", "Embedded & IoT", "Programming", "Business & Design"],
        "Civil" => &["Data & Analytics", "Programming", "Business & Design"],
        _ => return None,
    };
    Some(names)
}

/// Skill categories shown for a given study field, in catalog order.
/// Unknown fields get every category.
pub fn skill_categories_for_field(field: &str) -> Vec<&'static SkillCategory> {
    match skill_category_names_for_field(field) {
        Some(names) => SKILL_CATEGORIES
            .iter()
            .filter(|c| names.contains(&c.category))
            .collect(),
        None => SKILL_CATEGORIES.iter().collect(),
    }
}
