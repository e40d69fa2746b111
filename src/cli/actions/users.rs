use crate::{
    api::ApiClient,
    cli::globals::GlobalArgs,
    views::{
        dashboard::{LoadState, COLUMNS},
        DashboardView, TableRow,
    },
};
use anyhow::{bail, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// # Errors
/// Returns an error if the user list cannot be fetched.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let view = load_users(&client).await?;
    print!("{}", render_table(&view.table()));
    Ok(())
}

/// Runs the dashboard load once.
///
/// # Errors
/// Returns an error if the load fails. The failure has already been logged by
/// the view.
pub async fn load_users(client: &ApiClient) -> Result<DashboardView> {
    let mut view = DashboardView::new();
    if view.begin_load() {
        let result = client.list_users().await;
        view.finish_load(result);
    }

    if view.state() == LoadState::LoadFailed {
        bail!("failed to fetch users");
    }
    Ok(view)
}

/// Renders rows as a left-aligned text table with the dashboard's headers.
#[must_use]
pub fn render_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; COLUMNS.len()]> = rows
        .iter()
        .map(|row| {
            [
                row.uid.clone(),
                row.user_type.clone(),
                row.created.clone(),
                row.last_entry.clone(),
                row.password.clone(),
                row.toggle_label.to_string(),
                row.first_name.clone(),
                row.last_name.clone(),
                row.username.clone(),
                row.companies.clone(),
                row.details_path.clone(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, COLUMNS.iter().copied());
    for line in &cells {
        push_line(&mut out, &widths, line.iter().map(String::as_str));
    }
    out
}

fn push_line<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use crate::views::TableRow;

    fn row(uid: &str, companies: &str) -> TableRow {
        TableRow {
            uid: uid.to_string(),
            user_type: "admin".to_string(),
            created: "1709722800".to_string(),
            last_entry: String::new(),
            password: "********".to_string(),
            toggle_label: "Disable",
            toggle_pending: false,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
            companies: companies.to_string(),
            details_path: format!("/UserDetail/{uid}"),
            error: None,
        }
    }

    #[test]
    fn header_plus_one_line_per_row() {
        let out = render_table(&[row("a", "A, B"), row("bbbbbbbbbbbb", "")]);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("UID           User Type"));
        assert!(lines[1].contains("A, B"));
        assert!(lines[1].contains("********"));
        assert!(lines[2].ends_with("/UserDetail/bbbbbbbbbbbb"));
    }

    #[test]
    fn empty_table_still_has_headers() {
        let out = render_table(&[]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.trim_end().ends_with("Details"));
    }
}
