use crate::{
    api::ApiClient,
    cli::globals::GlobalArgs,
    views::{format::TimestampFormatter, DetailField, DetailState, DetailView, FieldValue},
};
use anyhow::{anyhow, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub uid: String,
}

/// # Errors
/// Returns an error if the user is missing or cannot be fetched.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let view = load_user(&client, &args.uid, args.globals.formatter()).await?;
    print!("{}", render_fields(&view.fields()));
    Ok(())
}

/// Runs the detail view's initial fetch.
///
/// # Errors
/// Returns the view's status line ("User not found" or the generic fetch error)
/// when no user could be shown.
pub async fn load_user(
    client: &ApiClient,
    uid: &str,
    formatter: TimestampFormatter,
) -> Result<DetailView> {
    let mut view = DetailView::new(uid, formatter);
    let result = client.get_user(uid).await;
    view.finish_load(result);

    match view.state() {
        DetailState::Ready(_) => Ok(view),
        _ => Err(anyhow!(view
            .status_message()
            .unwrap_or("Error fetching user")
            .to_string())),
    }
}

/// One `Label: value` line per field; toggles show the action they offer.
#[must_use]
pub fn render_fields(fields: &[DetailField]) -> String {
    let width = fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|field| {
            let value = match &field.value {
                FieldValue::Text(text) => text.clone(),
                FieldValue::Toggle { label, pending } => {
                    if *pending {
                        format!("[{label}] (pending)")
                    } else {
                        format!("[{label}]")
                    }
                }
            };
            let label = format!("{}:", field.label);
            format!("{label:<pad$} {value}\n", pad = width + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::render_fields;
    use crate::views::{DetailField, FieldValue};

    #[test]
    fn labels_are_aligned() {
        let out = render_fields(&[
            DetailField {
                key: "uid",
                label: "UID",
                value: FieldValue::Text("u-1".to_string()),
            },
            DetailField {
                key: "disable",
                label: "Disabled",
                value: FieldValue::Toggle {
                    label: "Enable",
                    pending: false,
                },
            },
        ]);

        assert_eq!(out, "UID:      u-1\nDisabled: [Enable]\n");
    }
}
