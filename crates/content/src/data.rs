//! The dataset.

use crate::region::RegionId;
use crate::types::{
	ContactInfo, Education, Experience, Extracurricular, NavEntry, Project, Skill,
};

pub const CONTACT: ContactInfo = ContactInfo {
	email: "vikashvd2004@gmail.com",
	linkedin: "https://www.linkedin.com/in/vikash-vd2004",
	github: "https://github.com",
	phone: "+91 6385286710",
	location: "Coimbatore, India",
};

/// Bundled résumé document, opened under [`RESUME_FILENAME`].
pub const RESUME_PATH: &str = "Vikash_Resume.pdf";
pub const RESUME_FILENAME: &str = "Vikash_Resume.pdf";

/// Rotating ticker topics, one visible at a time.
pub const LEARNING_TOPICS: &[&str] = &[
	"Tinkering with Rust & Actix Web",
	"Exploring Agentic Workflows with LangGraph",
	"Reading: Attention is All You Need",
	"Deep diving into System Design Patterns",
];

pub const SKILLS: &[Skill] = &[
	Skill { label: "Python/ML", value: 95, max: 100 },
	Skill { label: "FastAPI/Backend", value: 85, max: 100 },
	Skill { label: "RAG/LLMs", value: 90, max: 100 },
	Skill { label: "Software Eng", value: 60, max: 100 },
	Skill { label: "Docker/DevOps", value: 75, max: 100 },
	Skill { label: "SQL/DB", value: 85, max: 100 },
];

/// Highlight chips rendered next to the skill matrix.
pub const SKILL_CHIPS: &[&str] = &[
	"Python", "NumPy", "Pandas", "Scikit-learn", "FastAPI", "Docker", "RAG", "SQL",
];

pub const EXPERIENCE: &[Experience] = &[Experience {
	company: "Highonswift",
	role: "AI/ML Developer Intern",
	period: "June 2025 – Oct 2025",
	location: "Chennai, India",
	description: &[
		"Architected a modular, end-to-end Speech-to-Speech chatbot framework customizable for \
		 diverse business use cases, integrating OpenAI Whisper, Gemini LLM, and Coqui-TTS.",
		"Containerized the full application pipeline using Docker, ensuring consistent deployment \
		 environments and seamless scalability.",
		"Served as a Backend Developer for an AI-based affiliate automation platform targeting \
		 social media, building robust FastAPI services to handle high-volume data processing.",
	],
}];

pub const EDUCATION: Education = Education {
	school: "Coimbatore Institute of Technology",
	degree: "M.Sc. Decision and Computing Sciences (Integrated)",
	period: "Graduating 2026",
	cgpa: "7.52",
	location: "Coimbatore, India",
	logo: "cit_logo.png",
};

pub const EXTRACURRICULARS: &[Extracurricular] = &[
	Extracurricular {
		title: "NCC 'A' Certificate",
		organization: None,
		period: None,
		description: "Awarded for demonstrated leadership, discipline, and community service.",
	},
	Extracurricular {
		title: "District Level Volleyball Player",
		organization: None,
		period: None,
		description: "Represented the district team in competitive volleyball tournaments.",
	},
	Extracurricular {
		title: "Outreach Coordinator",
		organization: Some("CIT Photoclub"),
		period: Some("Nov 2023 – Nov 2024"),
		description: "Managed outreach initiatives and coordinated events for the club.",
	},
	Extracurricular {
		title: "Media Relations Coordinator",
		organization: Some("403Strats"),
		period: Some("Oct 2023 – Nov 2024"),
		description: "Managed public communications and social media strategies.",
	},
];

pub const PROJECTS: &[Project] = &[
	Project {
		title: "Agentic Speech-to-Speech Chatbot",
		category: "AI/ML",
		tech: &["Python", "FastAPI", "Docker", "Gemini API", "Whisper", "Coqui-TTS"],
		description: "An end-to-end agentic chatbot designed for seamless integration into web \
		              platforms. Capable of advanced, task-oriented conversations using a modular \
		              architecture.",
		link: None,
		github: None,
		architecture: &[
			"User Voice",
			"OpenAI Whisper (STT)",
			"FastAPI Agent",
			"Gemini LLM",
			"Coqui-TTS",
			"Audio Output",
		],
	},
	Project {
		title: "Stock Sentiment Analysis",
		category: "NLP & ML Fusion",
		tech: &["Python", "BeautifulSoup", "Scikit-learn", "Streamlit", "VADER"],
		description: "Real-time sentiment analysis pipeline for stock news. Features web scraping, \
		              text preprocessing, TF-IDF cosine similarity for filtering, and Random \
		              Forest trend prediction.",
		link: None,
		github: Some("https://github.com"),
		architecture: &[
			"Live News Data",
			"Scraper Engine",
			"Preprocessing",
			"VADER & TF-IDF",
			"Random Forest",
			"Streamlit UI",
		],
	},
	Project {
		title: "Speech Emotion Recognition",
		category: "Machine Learning",
		tech: &["Python", "Scikit-learn", "Librosa", "MFCC"],
		description: "System analyzing audio signals to extract MFCC features. Compared MLP and \
		              Random Forest classifiers to evaluate performance for mental health \
		              monitoring tools.",
		link: None,
		github: Some("https://github.com"),
		architecture: &[
			"Audio Signal",
			"Librosa Processing",
			"MFCC Extraction",
			"MLP Classifier",
			"Emotion Prediction",
		],
	},
];

pub const NAV_LINKS: &[NavEntry] = &[
	NavEntry { label: "Start", region: RegionId::Hero, icon: "»" },
	NavEntry { label: "Education", region: RegionId::Education, icon: "✦" },
	NavEntry { label: "Expertise", region: RegionId::Skills, icon: "◆" },
	NavEntry { label: "Work", region: RegionId::Experience, icon: "■" },
	NavEntry { label: "Projects", region: RegionId::Projects, icon: "λ" },
	NavEntry { label: "Activities", region: RegionId::Extracurriculars, icon: "♦" },
	NavEntry { label: "Contact", region: RegionId::Contact, icon: "✉" },
];

/// Console banner printed into a fresh scrollback.
pub const CONSOLE_BANNER: &[&str] = &[
	"Vikash OS [Version 1.0.0]",
	"Type \"help\" for available commands.",
];

/// Console prompt prefix.
pub const CONSOLE_PROMPT: &str = "guest@vikash-portfolio:~";

/// Fixed console command table. `clear` is handled specially and does not
/// appear here.
pub const CONSOLE_COMMANDS: &[(&str, &str)] = &[
	("help", "Available commands: about, skills, contact, clear, whoami"),
	("whoami", "Vikash V.D. | AI/ML Engineer | M.Sc. Student"),
	("about", "I build robust applications by bridging Software Engineering with Data Science."),
	("skills", "Python, FastAPI, Docker, RAG, LLMs, SQL"),
	("contact", "Email: vikashvd2004@gmail.com"),
];
