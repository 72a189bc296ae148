//! # Command Table
//!
//! The fixed vocabulary the portfolio terminal understands, and the canned
//! text each command prints. Two site variants share one table builder:
//!
//! - `Classic`: compact one-line answers, plus `leadership` and `sudo`.
//! - `Arcade`: boxed tables, plus the built-in `game` command.
//!
//! The differences between variants are data (`Profile`), not structure.
//! Lookup is an exact, case-sensitive match on the trimmed input line.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Command that resets the display surface.
pub const CLEAR_COMMAND: &str = "clear";
/// Command that hands the terminal panel to the snake game.
pub const GAME_COMMAND: &str = "game";

/// Which flavour of the site to present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Compact answers, leadership and sudo extras, slow typing.
    Classic,
    /// Boxed tables and the snake game.
    #[default]
    Arcade,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Arcade => "arcade",
        }
    }

    /// Whether `game` is part of this variant's vocabulary.
    pub fn game_enabled(self) -> bool {
        matches!(self, Variant::Arcade)
    }

    /// Per-character delay used for animated command output.
    pub fn default_typing_delay_ms(self) -> u64 {
        match self {
            Variant::Classic => 20,
            Variant::Arcade => 0,
        }
    }

    pub fn parse(name: &str) -> Option<Variant> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "arcade" => Some(Variant::Arcade),
            _ => None,
        }
    }
}

/// Immutable name → response mapping, built once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandTable {
    entries: BTreeMap<String, String>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the stock table for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        let pairs: &[(&str, &str)] = match variant {
            Variant::Classic => CLASSIC_RESPONSES,
            Variant::Arcade => ARCADE_RESPONSES,
        };
        let mut table = Self::new();
        for (name, response) in pairs {
            table.insert(name, response);
        }
        table
    }

    /// Adds or replaces an entry. Names are stored verbatim.
    pub fn insert(&mut self, name: &str, response: &str) {
        self.entries.insert(name.to_string(), response.to_string());
    }

    /// Exact, case-sensitive lookup. The caller trims the input line.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Response for a line, falling back to the "not found" text on a miss.
    pub fn respond(&self, line: &str) -> String {
        match self.get(line) {
            Some(response) => response.to_string(),
            None => not_found_message(line),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The message printed for anything not in the table.
pub fn not_found_message(line: &str) -> String {
    format!("Command not found: {line}\nType 'help' for a list.\n")
}

/// Header drawn at the top of a fresh (or cleared) terminal.
pub fn header_for(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic => {
            "help | about | projects | skills | experience | contact | education | \n\
             certifications | leadership | sudo | clear\n\
             --------------------------------------------------------------------------------\n"
        }
        Variant::Arcade => {
            "Type 'help' for available commands. Snake Game Built-In [Type: \"game\"]\n\
             ----------------------------------------------------------------------\n"
        }
    }
}

/// Lines typed out after the header when the terminal mounts.
pub const WELCOME: &str =
    "Welcome to my interactive portfolio terminal!\nType 'help' to see available commands.\n\n";

/// Written when `game` is dispatched, just before the hand-off.
pub const GAME_LAUNCH_MESSAGE: &str = "Launching Snake... Press Esc to exit.\n\n";

const CLASSIC_RESPONSES: &[(&str, &str)] = &[
    (
        "help",
        "about       - Learn about me\n\
         projects    - View my projects\n\
         skills      - See my technical skills\n\
         experience  - My work experience\n\
         contact     - How to reach me\n\
         education   - My educational background\n\
         certifications - View my certifications\n\
         leadership  - Leadership and community involvement\n\
         sudo        - A special greeting\n\
         clear       - Clear the terminal\n",
    ),
    (
        "about",
        "Hi, I'm Vaibhav Patel, a Cyber Security student at Ontario Tech University.\n",
    ),
    (
        "projects",
        "• Portfolio Website (Next.js, Tailwind, xterm.js)\n\
         • Web App X (Node.js, Express, SQLite)\n\
         • Cyber-sec Dashboard (React, D3)\n",
    ),
    (
        "skills",
        "JavaScript, TypeScript, React, Node.js, SQL, Linux, Git, AWS\n",
    ),
    (
        "experience",
        "YMCA ECEA Assistant (2023–), Project Assistant at Ontario Tech (2024–)\n",
    ),
    (
        "contact",
        "Email: vaibhav@example.com\nLinkedIn: linkedin.com/in/vaibhav-patel\n",
    ),
    (
        "education",
        "BIT (Hons) Networking & Cyber Security, Ontario Tech University ('22–'26)\n",
    ),
    (
        "certifications",
        "CompTIA Security+, AWS Certified Cloud Practitioner\n",
    ),
    (
        "leadership",
        "TA for Introductory Calculus; Radio Host, Sol Plaatje Secondary School\n",
    ),
    (
        "sudo",
        "Hi, I'm Vaibhav Patel, a Cyber Security student at Ontario Tech University.\n",
    ),
];

const ARCADE_RESPONSES: &[(&str, &str)] = &[
    (
        "help",
        "+-----------------+-------------------------------+\n\
         | Command         | Description                   |\n\
         +-----------------+-------------------------------+\n\
         | about           | Learn About Me                |\n\
         +-----------------+-------------------------------+\n\
         | projects        | View My Projects              |\n\
         +-----------------+-------------------------------+\n\
         | skills          | See My Technical Skills       |\n\
         +-----------------+-------------------------------+\n\
         | experience      | My Work Experience            |\n\
         +-----------------+-------------------------------+\n\
         | contact         | How To Reach Me               |\n\
         +-----------------+-------------------------------+\n\
         | education       | My Educational Background     |\n\
         +-----------------+-------------------------------+\n\
         | certifications  | View My Certifications        |\n\
         +-----------------+-------------------------------+\n\
         | game            | Play a mini game (Snake)      |\n\
         +-----------------+-------------------------------+\n\
         | clear           | Clear The Terminal            |\n\
         +-----------------+-------------------------------+\n\n",
    ),
    (
        "about",
        "I am a motivated undergraduate student pursuing an Honours Bachelor of IT in \
         Networking & Cyber Security at Ontario Tech University. I have hands-on experience \
         in project development, AI predictive analytics, and cloud implementation. \
         Passionate about solving complex problems, improving security systems, and \
         leveraging emerging technologies.\n\n",
    ),
    (
        "projects",
        "+---------------------------+----------------------------+\n\
         | Project                   | Description                |\n\
         +---------------------------+----------------------------+\n\
         | Predictive Maint. ML      | Python, TF, Sklearn; 85%   |\n\
         |                           | accuracy, -20% downtime.   |\n\
         +---------------------------+----------------------------+\n\
         | IAM & RBAC                | AD, Azure AD, AWS IAM;     |\n\
         |                           | MFA, SSO, automation.      |\n\
         +---------------------------+----------------------------+\n\
         | Cloud Virtualization      | AWS/Azure hybrid; +25%     |\n\
         |                           | scalability.               |\n\
         +---------------------------+----------------------------+\n\
         | Cyber Threat Intel        | Python compliance tool,    |\n\
         |                           | ELK, OSINT hunting.        |\n\
         +---------------------------+----------------------------+\n\
         | Inventory Mgmt System     | Java, AWS EC2, IBM Cloud;  |\n\
         |                           | +25% perf.                 |\n\
         +---------------------------+----------------------------+\n\n",
    ),
    (
        "skills",
        "+--------------+-----------------------------------------+\n\
         | Category     | Skills                                  |\n\
         +--------------+-----------------------------------------+\n\
         | Prog.        | Java, Python, Go, Scala, C++, C#, YAML  |\n\
         +--------------+-----------------------------------------+\n\
         | Backend      | Django, Ruby, MongoDB, MySQL, gRPC      |\n\
         +--------------+-----------------------------------------+\n\
         | Frontend     | React, JS, TS, Tailwind, Vue.js, HTML5  |\n\
         +--------------+-----------------------------------------+\n\
         | Cloud/DevOps | AWS, Azure, GCP, Docker, Git, K8s       |\n\
         +--------------+-----------------------------------------+\n\
         | OS           | Win Server, Kali, Debian                |\n\
         +--------------+-----------------------------------------+\n\n",
    ),
    (
        "experience",
        "+----------------------+---------------------------------+\n\
         | Role                 | Organization                    |\n\
         +----------------------+---------------------------------+\n\
         | TA (Jan–Apr 2025)    | Ontario Tech University         |\n\
         +----------------------+---------------------------------+\n\
         | CyberSec Leader      | Ontario Tech University         |\n\
         | (Sep 2023–Apr 2024)  |                                 |\n\
         +----------------------+---------------------------------+\n\
         | DevOps Assistant     | SABC, South Africa              |\n\
         | (Sep–Dec 2021)       |                                 |\n\
         +----------------------+---------------------------------+\n\n",
    ),
    (
        "contact",
        "Email: Vaibhav.patel4@ontariotechu.net\n\
         LinkedIn: https://www.linkedin.com/in/vaibhavpatel2003/\n\n",
    ),
    (
        "education",
        "Pursuing Honours Bachelor of IT in Networking & Cyber Security at Ontario Tech \
         University focused on cloud security, penetration testing, and enterprise \
         infrastructure.\n\n",
    ),
    (
        "certifications",
        "View all certifications on my Credly profile:\n\
         https://www.credly.com/users/vaibhav-patel.9063b05a/badges#credly\n\n",
    ),
];
