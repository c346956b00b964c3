//! Built-in boot script and canned command text.

use std::{fs, path::Path};

use shared::{domain::BootScript, error::ContentError};

const BUILTIN_SCRIPT: &str = include_str!("../content/boot.json");

pub const WHOAMI: &str = "Tobias Vontobel - Machine Learning Engineer & Researcher";
pub const PWD: &str = "/home/tobias/portfolio";
pub const LS: &str = "about.txt  skills/  research_papers/  projects/  contact.json  README.md";

pub const GITHUB_URL: &str = "https://github.com/votobias";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/tobias-vontobel-7a4b3b343";
pub const ARXIV_URL: &str = "https://arxiv.org/search/cs?searchtype=author&query=Vontobel%2C+T";
pub const EMAIL_ADDRESS: &str = "hello@vontobel.dev";

pub const HELP: &str = r#"Available commands:
help      - Show this help message
about     - Learn more about me
skills    - View my technical skills
papers    - View my research papers
projects  - See my latest projects
contact   - Get my contact information
clear     - Clear the terminal
whoami    - Display current user
ls        - List directory contents
pwd       - Show current directory
date      - Display current date and time
echo      - Echo back the arguments
github    - Open my GitHub profile
linkedin  - Open my LinkedIn profile
email     - Send me an email
arxiv     - Open my arXiv author profile
privacy   - View privacy policy and analytics info

Navigation:
↑/↓ arrows - Navigate command history
Esc - Focus the input, Ctrl+L - Clear the terminal"#;

pub const ABOUT: &str = r#"About Tobias Vontobel:

Machine learning engineer with research experience at Disney Research Studios, where I 
developed the HiWave framework for high-resolution image generation. Computer Science 
graduate from ETH Zurich with expertise in generative AI, diffusion models, and computer vision.

My work spans from academic research (SIGGRAPH Asia submissions, patent applications) to 
practical applications including iOS game development and enterprise solutions. Published 
researcher with focus on novel algorithms for AI and security applications.

Currently exploring: Advanced diffusion models, frequency-domain image processing, and 
the intersection of research and real-world AI deployment."#;

pub const SKILLS: &str = r#"Technical Skills:

🤖 AI & Machine Learning
   • PyTorch, TensorFlow, Hugging Face
   • Diffusion Models, Generative AI
   • Computer Vision, Deep Learning
   • PyWavelets, Frequency-Domain Processing
   • GPU Optimization & Distributed Computing

💻 Programming
   • Python, C++, C#, Java
   • SQL, Algorithm Design
   • Unity Game Development
   • Enterprise Software Development

🛠️ Tools & Libraries
   • NumPy/SciPy, Git, Docker
   • SAP HANA, GPU Clusters
   • CI/CD, Database Design
   • Consumer GPU Optimization

📱 Specializations
   • High-Resolution Image Synthesis
   • Security Research & Analysis
   • Mobile Game Development
   • ERP & Business Process Automation"#;

pub const PAPERS: &str = r#"Research Papers:

📄 HiWave: Training-Free High-Resolution Image Generation via Wavelet-Based Diffusion Sampling
   arXiv:2506.20452 [cs.CV] • 2025
   Novel approach for high-resolution image generation using wavelet-based diffusion 
   sampling without additional training requirements.
   Link: https://arxiv.org/abs/2506.20452

🔒 Breaking reCAPTCHAv2
   Andreas Plesner, Tobias Vontobel, Roger Wattenhofer
   arXiv:2409.08831 [cs.CR] • 2024
   Security analysis demonstrating vulnerabilities in reCAPTCHAv2 systems and 
   proposing countermeasures.
   arXiv: https://arxiv.org/abs/2409.08831
   GitHub: https://github.com/aplesner/Breaking-reCAPTCHAv2

⚡ Guidance in the Frequency Domain Enables High-Fidelity Sampling at Low CFG Scales
   Seyedmorteza Sadat, Tobias Vontobel, Farnood Salehi, Romann M. Weber
   arXiv:2506.19713 [cs.CV] • 2025
   Advanced guidance techniques in frequency domain for improved diffusion model 
   sampling with reduced computational requirements.
   Link: https://arxiv.org/abs/2506.19713

Research focuses: Computer Vision, Diffusion Models, Security, Machine Learning
Type 'arxiv' to view my complete publication list."#;

pub const PROJECTS: &str = r#"Recent Projects:

🎨 HiWave Framework (Disney Research Studios)
   Master's thesis: Novel training-free high-resolution image generation framework
   Technologies: PyTorch, Diffusion Models, Discrete Wavelet Transform
   Status: SIGGRAPH Asia 2025 submission, patent pending

🏙️ Flatland Empire
   iOS city-building game featured in Apple's "New Games We Love"
   Technologies: Unity, C#, iOS Development
   Impact: 150,000+ downloads in first month

🔒 CAPTCHA Solver
   Automated system achieving 100% bypass rate using advanced ML
   Technologies: Python, YOLOv8, Computer Vision
   Status: Published at IEEE COMPSAC 2024

🏢 Enterprise Solutions
   ERP automation and data analysis tools for fintech and logistics
   Technologies: C#, SQL, SAP HANA, Python, TensorFlow
   Companies: modum.io AG, Credit Suisse

For more details about any project, visit my GitHub profile or contact me directly."#;

pub const CONTACT: &str = r#"Contact Information:

📧 Email: hello@vontobel.dev
🐙 GitHub: https://github.com/votobias
💼 LinkedIn: https://linkedin.com/in/tobias-vontobel-7a4b3b343
📍 Location: Zurich, Switzerland

💡 Currently: Available for exciting opportunities in AI research and development

Feel free to reach out for:
• Research collaboration opportunities
• AI/ML consulting
• Generative AI projects
• Speaking engagements
• Academic partnerships

I'm always interested in discussing cutting-edge AI research and innovative applications!"#;

pub const PRIVACY: &str = r#"Privacy Policy & Analytics Information:

ANALYTICS
This website uses Counter.dev for minimal, privacy-focused analytics.
Counter.dev is a free, lightweight analytics service that:

• Does NOT use cookies
• Does NOT track individual users
• Does NOT collect personal data
• Fully GDPR compliant

WHAT WE TRACK:
• Total page views
• Unique visitor count (via hash, not IP)
• Country of origin
• Referrer source
• Screen resolution
• User agent (browser/OS type)

YOUR PRIVACY:
• No IP addresses are stored
• No personal information is collected
• No tracking across websites
• No consent banner needed (GDPR compliant)
• Data is aggregated and anonymous

DATA USAGE:
Analytics data helps me:
• Understand portfolio reach
• See which content resonates
• Track visitor geography for professional networking
• Improve website performance

BLOCKING:
You can block Counter.dev using any ad blocker or by adding
cdn.counter.dev to your hosts file or DNS blocker.

For more info: https://counter.dev/privacy

Your privacy is respected. This is a professional portfolio, not a data collection site."#;

pub fn builtin_script() -> Result<BootScript, ContentError> {
    parse_script(BUILTIN_SCRIPT)
}

pub fn load_script(path: &Path) -> Result<BootScript, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&raw)
}

pub fn parse_script(raw: &str) -> Result<BootScript, ContentError> {
    let script: BootScript = serde_json::from_str(raw)?;
    if script.sections.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(script)
}

#[cfg(test)]
mod tests {
    use shared::domain::{ContentSection, Payload, Record};

    use super::*;

    #[test]
    fn builtin_script_covers_every_payload_shape() {
        let script = builtin_script().expect("builtin script");
        assert_eq!(
            script.greeting.as_ref().map(|g| g.response.as_str()),
            Some(WHOAMI)
        );
        assert!(matches!(script.sections[0], ContentSection::Ascii { .. }));

        let payloads: Vec<&Payload> = script
            .sections
            .iter()
            .filter_map(|section| match section {
                ContentSection::Command { payload, .. } => Some(payload),
                ContentSection::Ascii { .. } => None,
            })
            .collect();
        assert!(payloads.iter().any(|p| matches!(p, Payload::Lines(_))));
        assert!(payloads.iter().any(|p| matches!(p, Payload::Categories(_))));
        assert!(payloads.iter().any(|p| matches!(p, Payload::Preformatted(_))));
        assert!(payloads.iter().any(
            |p| matches!(p, Payload::Records(r) if matches!(r.first(), Some(Record::Paper(_))))
        ));
        assert!(payloads.iter().any(
            |p| matches!(p, Payload::Records(r) if matches!(r.first(), Some(Record::Project(_))))
        ));
    }

    #[test]
    fn rejects_script_without_sections() {
        let err = parse_script(r#"{"sections": []}"#).expect_err("should fail");
        assert!(matches!(err, ContentError::Empty));
    }

    #[test]
    fn reports_missing_content_file() {
        let err = load_script(Path::new("/definitely/not/here.json")).expect_err("should fail");
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn help_lists_every_command() {
        for name in [
            "help", "about", "skills", "papers", "projects", "contact", "clear", "whoami", "ls",
            "pwd", "date", "echo", "github", "linkedin", "email", "arxiv", "privacy",
        ] {
            assert!(
                HELP.lines().any(|line| line.starts_with(name)),
                "help is missing {name}"
            );
        }
    }
}
