//! Persona command handlers.

use super::output::{persona_line, print_list};
use super::PersonaCommands;
use crate::AppState;
use anyhow::{Context, bail};
use sparc_core::{PersonaProfile, PersonaUpdate, TagSet};

fn roles(input: &str) -> Vec<String> {
    TagSet::from_csv(input).into_vec()
}

/// Handle persona commands.
pub async fn handle_persona_command(state: &AppState, cmd: PersonaCommands) -> anyhow::Result<()> {
    let store = state.store();
    match cmd {
        PersonaCommands::Create {
            name,
            roles: role_input,
            experience,
            proficiency,
            styles,
            pain_points,
        } => {
            let mut profile = PersonaProfile {
                name,
                roles: roles(&role_input),
                experience,
                technical_proficiency: proficiency,
                pain_points: pain_points.filter(|p| !p.trim().is_empty()),
                ..PersonaProfile::default()
            };
            for style in styles {
                profile = profile.with_style(style);
            }

            let persona = store.create_persona(&profile).await?;
            println!("Created persona {}: {}", persona.id, persona.profile.name);
        }

        PersonaCommands::List { format } => {
            let personas = store.list_personas().await?;
            print_list(&personas, format, persona_line)?;
        }

        PersonaCommands::Update {
            id,
            name,
            roles: role_input,
            experience,
            proficiency,
            styles,
            pain_points,
        } => {
            let update = PersonaUpdate {
                name,
                roles: role_input.as_deref().map(roles),
                experience,
                technical_proficiency: proficiency,
                content_styles: styles,
                pain_points,
            };
            if update.is_empty() {
                bail!("nothing to update; pass at least one field");
            }
            if !store.update_persona(id, &update).await? {
                bail!("persona {} not found", id);
            }
            println!("Updated persona {}", id);
        }

        PersonaCommands::Delete { id } => {
            let deleted = store
                .delete_persona(id)
                .await
                .with_context(|| format!("Failed to delete persona {}", id))?;
            if !deleted {
                bail!("persona {} not found", id);
            }
            println!("Deleted persona {}", id);
        }
    }
    Ok(())
}
