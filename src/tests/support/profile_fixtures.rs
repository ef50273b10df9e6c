use serde_json::{json, Value};

/// Every section populated, including both optional lists.
pub fn full_profile_json() -> Value {
    json!({
        "intro": {
            "name": "Jane Doe",
            "nickname": "jd",
            "phone": "+1 555 0100",
            "email": "jane@example.com",
            "github": "https://github.com/janedoe",
            "linkedin": "https://linkedin.com/in/janedoe",
            "location": "Lisbon, Portugal",
            "website": "https://janedoe.dev"
        },
        "projects": [
            {
                "name": "Trail Log",
                "details": "Offline-first hiking journal",
                "url": "https://github.com/janedoe/trail-log",
                "hide": false
            },
            {
                "name": "Old Blog",
                "details": "First static site",
                "url": "https://github.com/janedoe/blog",
                "hide": true
            }
        ],
        "technologies": [
            { "section": "Languages", "details": "Rust, TypeScript, SQL" },
            { "section": "Infrastructure", "details": "Docker, Postgres, GCP" }
        ],
        "workExperiences": [
            {
                "position": "Backend Engineer",
                "company": "Acme Corp",
                "url": "https://acme.example.com",
                "years": ["2021", "2022", "2023"],
                "details": ["Built the billing service", "Ran on-call rotation"]
            },
            {
                "position": "Intern",
                "company": "Startup Ltd",
                "url": "https://startup.example.com",
                "years": ["2019 - 2020"],
                "details": []
            }
        ],
        "educations": [
            { "head": "B.Sc. Computer Science", "details": "Tech University, 2015 - 2019" }
        ],
        "interests": ["reading", "hiking"],
        "documents": [
            { "name": "Resume", "url": "https://janedoe.dev/resume.pdf" },
            { "name": "Portfolio deck", "url": "/docs/deck.pdf", "hide": true }
        ],
        "media": [
            {
                "name": "Conference talk",
                "url": "/media/talk.mov",
                "type": "video/quicktime",
                "hide": false
            },
            { "name": "Headshot", "url": "https://janedoe.dev/me.jpg" }
        ],
        "resumeUrl": {
            "sourceLink": "https://github.com/janedoe/resume",
            "fullVersionLink": "https://janedoe.dev/resume-full.pdf"
        }
    })
}

/// Smallest realistic payload: empty history, no documents or media.
pub fn minimal_profile_json() -> Value {
    json!({
        "intro": {
            "name": "Jane Doe",
            "nickname": "jd",
            "phone": "+1 555 0100",
            "email": "jane@example.com",
            "github": "https://github.com/janedoe",
            "linkedin": "https://linkedin.com/in/janedoe",
            "location": "Lisbon, Portugal",
            "website": "https://janedoe.dev"
        },
        "projects": [
            {
                "name": "Trail Log",
                "details": "Offline-first hiking journal",
                "url": "https://github.com/janedoe/trail-log",
                "hide": true
            }
        ],
        "technologies": [
            { "section": "Languages", "details": "Rust" }
        ],
        "workExperiences": [],
        "educations": [],
        "interests": ["reading"],
        "resumeUrl": {
            "sourceLink": "https://github.com/janedoe/resume",
            "fullVersionLink": "https://janedoe.dev/resume-full.pdf"
        }
    })
}
