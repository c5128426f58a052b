use dioxus::prelude::*;
use folio_core::{Section, SKILLS};

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: Section::Skills.anchor(), class: "section skills",
            h1 { class: "section-title", "Skills & Proficiency" }
            div { class: "section-rule" }

            div { class: "skill-grid fade-up",
                for skill in SKILLS.iter() {
                    div { key: "{skill.name}", class: "skill-card",
                        img { class: "skill-icon", src: skill.icon, alt: skill.name }
                        h2 { "{skill.name}" }
                        div { class: "skill-track",
                            div {
                                class: "skill-fill {skill.accent}",
                                style: "width: {skill.level_label()}",
                            }
                            span { class: "skill-level", "{skill.level_label()}" }
                        }
                    }
                }
            }
        }
    }
}
