//! Printable badge snapshot.

use serde::{Deserialize, Serialize};

use crate::palette::HallPalette;
use crate::slug::badge_slug;
use crate::visitor::{Attendance, Visitor};

/// Denormalized snapshot of one visitor, frozen at print time.
///
/// This is what travels across the badge channel. The badge view renders it
/// as-is and never consults the registrant store, so later edits to the
/// visitor do not retroactively change an already-stored badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub attendance: Option<Attendance>,
    #[serde(default)]
    pub hall: Option<String>,
    /// Resolved hall band color: the palette entry, or the default when the
    /// hall is unknown or unset.
    pub color: String,
}

impl BadgeRecord {
    /// Freeze a visitor into a badge snapshot, resolving its hall color.
    pub fn compose(visitor: &Visitor, palette: &HallPalette) -> Self {
        Self {
            id: visitor.id.clone(),
            name: visitor.name.clone(),
            email: visitor.email.clone(),
            phone: visitor.phone.clone(),
            organization: visitor.organization.clone(),
            job_title: visitor.job_title.clone(),
            department: visitor.department.clone(),
            country: visitor.country.clone(),
            attendance: visitor.attendance,
            hall: visitor.hall.clone(),
            color: palette.color_for(visitor.hall.as_deref()).to_string(),
        }
    }

    /// The slug this badge travels under. An unset hall contributes an
    /// empty part.
    pub fn slug(&self) -> String {
        badge_slug(&self.name, self.hall.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_BADGE_COLOR;

    fn visitor(name: &str, hall: Option<&str>) -> Visitor {
        Visitor {
            id: "17".to_string(),
            name: name.to_string(),
            email: "v@example.com".to_string(),
            phone: "+1-555-0456".to_string(),
            organization: "Tech Innovations".to_string(),
            job_title: "Product Manager".to_string(),
            department: Some("Product".to_string()),
            country: Some("Canada".to_string()),
            attendance: Some(Attendance::Confirmed),
            hall: hall.map(str::to_string),
        }
    }

    #[test]
    fn compose_resolves_palette_color() {
        let badge = BadgeRecord::compose(
            &visitor("Sarah Johnson", Some("Blue Hall")),
            &HallPalette::default(),
        );
        assert_eq!(badge.color, "#3498DB");
        assert_eq!(badge.hall.as_deref(), Some("Blue Hall"));
        assert_eq!(badge.name, "Sarah Johnson");
    }

    #[test]
    fn compose_falls_back_for_unknown_hall() {
        let badge = BadgeRecord::compose(
            &visitor("Sarah Johnson", Some("Mystery Hall")),
            &HallPalette::default(),
        );
        assert_eq!(badge.color, DEFAULT_BADGE_COLOR);
    }

    #[test]
    fn compose_falls_back_for_unset_hall() {
        let badge = BadgeRecord::compose(&visitor("Sarah Johnson", None), &HallPalette::default());
        assert_eq!(badge.color, DEFAULT_BADGE_COLOR);
    }

    #[test]
    fn slug_uses_name_and_hall() {
        let badge = BadgeRecord::compose(
            &visitor("Sarah Johnson", Some("Blue Hall")),
            &HallPalette::default(),
        );
        assert_eq!(badge.slug(), "sarah-johnson-blue-hall");
    }

    #[test]
    fn slug_with_unset_hall_has_empty_part() {
        let badge = BadgeRecord::compose(&visitor("Sarah Johnson", None), &HallPalette::default());
        assert_eq!(badge.slug(), "sarah-johnson-");
    }

    #[test]
    fn round_trips_through_json() {
        let badge = BadgeRecord::compose(
            &visitor("Sarah Johnson", Some("Blue Hall")),
            &HallPalette::default(),
        );
        let json = serde_json::to_string(&badge).unwrap();
        let back: BadgeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, badge);
    }
}
