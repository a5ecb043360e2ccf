use super::imei::Imei;

/// Seam shared by both record types: identity plus display names for pages
/// and log lines.
pub trait Entity {
    fn imei(&self) -> &Imei;
    fn element_name() -> &'static str;
    fn list_name() -> &'static str;
}

/// Lookup at the detail/edit boundary. A missing record is a regular
/// `None`, never an error.
pub fn find_by_imei<'a, T: Entity>(items: &'a [T], imei: &str) -> Option<&'a T> {
    items.iter().find(|item| item.imei().as_str() == imei)
}
