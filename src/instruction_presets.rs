use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InstructionPreset {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub emoji: String,
    pub preset_type: PresetType,
}

/// Distinguishes presets meant for whole-project scaffolds from view generation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Copy, Default)]
pub enum PresetType {
    Project,
    Views,
    #[default]
    Both,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InstructionPresetLibrary {
    presets: HashMap<String, InstructionPreset>,
}

impl Default for InstructionPresetLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionPresetLibrary {
    pub fn new() -> Self {
        let mut presets = HashMap::new();

        presets.insert(
            "default".to_string(),
            InstructionPreset {
                name: "Default".to_string(),
                description: "Standard production-ready output".to_string(),
                instructions: "Generate clean, conventional code that a professional team would ship. Favor clarity over cleverness.".to_string(),
                emoji: "📝".to_string(),
                preset_type: PresetType::Both,
            },
        );

        presets.insert(
            "minimal".to_string(),
            InstructionPreset {
                name: "Minimal".to_string(),
                description: "Lean scaffolds without extras".to_string(),
                instructions: "Keep every file as small as possible. No comments, no optional middleware, no sample data. Only what the project needs to start.".to_string(),
                emoji: "🎯".to_string(),
                preset_type: PresetType::Both,
            },
        );

        presets.insert(
            "documented".to_string(),
            InstructionPreset {
                name: "Documented".to_string(),
                description: "XML doc comments and inline explanations".to_string(),
                instructions: "Add XML documentation comments to every public class, method, and property. Explain non-obvious configuration values inline.".to_string(),
                emoji: "📚".to_string(),
                preset_type: PresetType::Both,
            },
        );

        presets.insert(
            "enterprise".to_string(),
            InstructionPreset {
                name: "Enterprise".to_string(),
                description: "Layered architecture with full plumbing".to_string(),
                instructions: "Structure the code for a large team: interfaces for every service, constructor injection throughout, options-pattern configuration, and structured logging on every code path.".to_string(),
                emoji: "🏢".to_string(),
                preset_type: PresetType::Project,
            },
        );

        presets.insert(
            "prototype".to_string(),
            InstructionPreset {
                name: "Prototype".to_string(),
                description: "Quick demo-quality output".to_string(),
                instructions: "Optimize for getting something on screen fast. In-memory storage, seeded sample data, permissive CORS. Skip validation beyond the essentials.".to_string(),
                emoji: "⚡".to_string(),
                preset_type: PresetType::Project,
            },
        );

        presets.insert(
            "accessible".to_string(),
            InstructionPreset {
                name: "Accessible".to_string(),
                description: "Accessibility-first Razor views".to_string(),
                instructions: "Every view must meet WCAG AA: ARIA labels on interactive elements, label elements bound to every input, visible focus states, and semantic landmarks.".to_string(),
                emoji: "♿".to_string(),
                preset_type: PresetType::Views,
            },
        );

        Self { presets }
    }

    pub fn get_preset(&self, key: &str) -> Option<&InstructionPreset> {
        self.presets.get(key)
    }

    pub fn list_presets(&self) -> Vec<(&String, &InstructionPreset)> {
        let mut presets: Vec<_> = self.presets.iter().collect();
        presets.sort_by(|a, b| a.0.cmp(b.0));
        presets
    }

    /// Presets applicable to the given command type (Both always qualifies)
    pub fn list_valid_presets_for_command(&self, preset_type: PresetType) -> Vec<(&String, &InstructionPreset)> {
        self.list_presets()
            .into_iter()
            .filter(|(_, preset)| {
                preset.preset_type == preset_type || preset.preset_type == PresetType::Both
            })
            .collect()
    }
}

pub fn get_instruction_preset_library() -> InstructionPresetLibrary {
    InstructionPresetLibrary::new()
}

/// Format the preset list for terminal display
pub fn list_presets_formatted(library: &InstructionPresetLibrary) -> String {
    library
        .list_presets()
        .into_iter()
        .map(|(key, preset)| {
            let type_tag = match preset.preset_type {
                PresetType::Project => "[project]",
                PresetType::Views => "[views]",
                PresetType::Both => "[both]",
            };
            format!(
                "{} {:<12} {:<9} - {}",
                preset.emoji, key, type_tag, preset.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_exists() {
        let library = get_instruction_preset_library();
        assert!(library.get_preset("default").is_some());
    }

    #[test]
    fn views_filter_excludes_project_presets() {
        let library = get_instruction_preset_library();
        let views_presets = library.list_valid_presets_for_command(PresetType::Views);
        assert!(views_presets.iter().any(|(key, _)| *key == "accessible"));
        assert!(views_presets.iter().all(|(key, _)| *key != "enterprise"));
    }

    #[test]
    fn formatted_list_mentions_every_preset() {
        let library = get_instruction_preset_library();
        let formatted = list_presets_formatted(&library);
        for (key, _) in library.list_presets() {
            assert!(formatted.contains(key.as_str()));
        }
    }
}
