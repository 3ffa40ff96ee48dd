//! Line format of the backup file: `Role,Username,Password,TimeCreated`.

use woms_core::Account;

pub const HEADER: &str = "# Role,Username,Password,TimeCreated";

/// Parses the backup file. Comment and blank lines are skipped, as are lines
/// with fewer than four fields. The last field keeps any further commas.
pub fn parse(content: &str) -> Vec<Account> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Account> {
    let mut parts = line.splitn(4, ',');
    let role = parts.next()?.trim();
    let username = parts.next()?.trim();
    let password = parts.next()?.trim();
    let time_created = parts.next()?.trim();

    Some(Account::new(
        role,
        username,
        password,
        Some(time_created.to_string()),
    ))
}

/// Full file contents, header first.
pub fn render(accounts: &[Account]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + accounts.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for account in accounts {
        let time_created = if account.time_created.trim().is_empty() {
            Account::timestamp_now()
        } else {
            account.time_created.clone()
        };
        out.push_str(&[
            field(&account.role),
            field(&account.username),
            field(&account.password),
            field(&time_created),
        ]
        .join(","));
        out.push('\n');
    }
    out
}

fn field(value: &str) -> String {
    value.replace(',', " ").trim().to_string()
}
