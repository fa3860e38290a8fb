//! Static sample data for local development and demos.
//!
//! These records extend the wire shapes with presentation-only fields (age,
//! birth date, voice lines, outfit and expression art, timestamps). They are
//! demo content, not a contract the backend must satisfy.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SampleVoiceLine {
    pub line_name: &'static str,
    pub audio_path: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleOutfit {
    pub name: &'static str,
    pub default_image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleExpression {
    pub name: &'static str,
    pub image_path: &'static str,
    pub outfit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleCharacter {
    pub id: &'static str,
    pub name: &'static str,
    pub nickname: &'static str,
    pub color: &'static str,
    pub age: u8,
    pub birth_date: &'static str,
    pub bio: &'static str,
    pub voice_lines: Vec<SampleVoiceLine>,
    pub outfits: Vec<SampleOutfit>,
    pub expressions: Vec<SampleExpression>,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleProject {
    pub id: &'static str,
    pub name: &'static str,
    pub main_plot: &'static str,
    pub main_character_id: &'static str,
    pub tags: Vec<&'static str>,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

pub fn sample_characters() -> Vec<SampleCharacter> {
    vec![
        SampleCharacter {
            id: "1",
            name: "Alice",
            nickname: "Ali",
            color: "#FF6B6B",
            age: 18,
            birth_date: "03/15",
            bio: "A cheerful protagonist who loves adventure and has a mysterious past. \
                  She recently discovered she has elemental magic powers.",
            voice_lines: vec![
                SampleVoiceLine {
                    line_name: "greeting",
                    audio_path: "audio/alice/greeting.ogg",
                },
                SampleVoiceLine {
                    line_name: "surprise",
                    audio_path: "audio/alice/surprise.ogg",
                },
            ],
            outfits: vec![
                SampleOutfit {
                    name: "casual",
                    default_image: "alice_casual.png",
                },
                SampleOutfit {
                    name: "school",
                    default_image: "alice_school.png",
                },
                SampleOutfit {
                    name: "magical",
                    default_image: "alice_magical.png",
                },
            ],
            expressions: vec![
                SampleExpression {
                    name: "happy",
                    image_path: "alice_happy.png",
                    outfit: "casual",
                },
                SampleExpression {
                    name: "sad",
                    image_path: "alice_sad.png",
                    outfit: "casual",
                },
                SampleExpression {
                    name: "angry",
                    image_path: "alice_angry.png",
                    outfit: "casual",
                },
                SampleExpression {
                    name: "surprised",
                    image_path: "alice_surprised.png",
                    outfit: "casual",
                },
                SampleExpression {
                    name: "magical",
                    image_path: "alice_magical.png",
                    outfit: "magical",
                },
            ],
            created_at: "2024-01-10T09:30:00Z",
        },
        SampleCharacter {
            id: "2",
            name: "Bob",
            nickname: "Bobby",
            color: "#4ECDC4",
            age: 17,
            birth_date: "08/22",
            bio: "The reliable best friend who always has your back. He's practical, \
                  logical, and surprisingly good at solving puzzles.",
            voice_lines: vec![SampleVoiceLine {
                line_name: "greeting",
                audio_path: "audio/bob/greeting.ogg",
            }],
            outfits: vec![
                SampleOutfit {
                    name: "casual",
                    default_image: "bob_casual.png",
                },
                SampleOutfit {
                    name: "school",
                    default_image: "bob_school.png",
                },
            ],
            expressions: vec![
                SampleExpression {
                    name: "neutral",
                    image_path: "bob_neutral.png",
                    outfit: "casual",
                },
                SampleExpression {
                    name: "smile",
                    image_path: "bob_smile.png",
                    outfit: "casual",
                },
                SampleExpression {
                    name: "concerned",
                    image_path: "bob_concerned.png",
                    outfit: "casual",
                },
            ],
            created_at: "2024-01-12T14:20:00Z",
        },
        SampleCharacter {
            id: "3",
            name: "Catherine",
            nickname: "Cat",
            color: "#FFD166",
            age: 19,
            birth_date: "11/03",
            bio: "Mysterious transfer student with hidden powers. She seems cold at \
                  first but has a warm heart.",
            voice_lines: vec![],
            outfits: vec![
                SampleOutfit {
                    name: "magical",
                    default_image: "catherine_magical.png",
                },
                SampleOutfit {
                    name: "school",
                    default_image: "catherine_school.png",
                },
            ],
            expressions: vec![
                SampleExpression {
                    name: "serious",
                    image_path: "catherine_serious.png",
                    outfit: "magical",
                },
                SampleExpression {
                    name: "mysterious",
                    image_path: "catherine_mysterious.png",
                    outfit: "magical",
                },
                SampleExpression {
                    name: "determined",
                    image_path: "catherine_determined.png",
                    outfit: "magical",
                },
            ],
            created_at: "2024-01-14T11:45:00Z",
        },
    ]
}

pub fn sample_projects() -> Vec<SampleProject> {
    vec![
        SampleProject {
            id: "1",
            name: "Mystic Academy",
            main_plot: "A mysterious school hiding magical secrets where students \
                        discover their supernatural abilities while navigating teenage \
                        drama and ancient prophecies.",
            main_character_id: "1",
            tags: vec!["fantasy", "school", "mystery", "magic"],
            created_at: "2024-01-15T10:30:00Z",
            updated_at: "2024-01-20T14:45:00Z",
        },
        SampleProject {
            id: "2",
            name: "Cyberpunk Dreams",
            main_plot: "In a dystopian future, a hacker uncovers a conspiracy that \
                        could change the fate of the city.",
            main_character_id: "2",
            tags: vec!["sci-fi", "cyberpunk", "thriller"],
            created_at: "2024-01-18T16:20:00Z",
            updated_at: "2024-01-19T09:15:00Z",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_characters_have_unique_ids() {
        let characters = sample_characters();
        assert_eq!(characters.len(), 3);
        let mut ids: Vec<_> = characters.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_sample_projects_reference_sample_characters() {
        let character_ids: Vec<_> = sample_characters().iter().map(|c| c.id).collect();
        for project in sample_projects() {
            assert!(character_ids.contains(&project.main_character_id));
        }
    }

    #[test]
    fn test_sample_expressions_reference_defined_outfits() {
        for character in sample_characters() {
            let outfit_names: Vec<_> = character.outfits.iter().map(|o| o.name).collect();
            for expression in &character.expressions {
                assert!(
                    outfit_names.contains(&expression.outfit),
                    "{} has expression '{}' on undefined outfit '{}'",
                    character.name,
                    expression.name,
                    expression.outfit
                );
            }
        }
    }

    #[test]
    fn test_samples_serialize_to_json() {
        let json = serde_json::to_string(&sample_characters()).unwrap();
        assert!(json.contains("\"Alice\""));
        let json = serde_json::to_string(&sample_projects()).unwrap();
        assert!(json.contains("\"Mystic Academy\""));
    }
}
