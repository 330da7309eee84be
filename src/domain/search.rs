use crate::prelude::Contact;

/// Contacts whose name contains `query`, ignoring case. Order is kept.
pub fn filter_by_name<'a>(query: &str, contact_list: &'a [Contact]) -> Vec<&'a Contact> {
    let query = query.to_lowercase();

    contact_list
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .collect()
}
