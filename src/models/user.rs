//! User record shapes as returned by the upstream API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One person from the upstream collection.
///
/// Every top-level group is optional: when the request carries an `inc`
/// field selector the upstream omits everything not listed. Keys without a
/// typed field land in `extra`, so a record serializes back to what the
/// upstream sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FullName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<Login>,
    /// Date of birth and current age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DatedAge>,
    /// Registration date and account age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered: Option<DatedAge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
    /// National identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NationalId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,
    /// Nationality code (e.g. `"GB"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub title: String,
    pub first: String,
    pub last: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Postal code. The upstream sends a number for some nationalities and a
/// string for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{n}"),
            Postcode::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: String,
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ISO-8601 timestamp paired with the age in years it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedAge {
    pub date: String,
    pub age: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalId {
    pub name: String,
    /// `null` upstream for nationalities without an identifier scheme.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Profile picture URLs in three sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lightweight projection of a [`UserRecord`].
///
/// All fields are required, so decoding fails if the upstream omitted any
/// of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: ShortName,
    pub email: String,
    pub picture: Thumbnail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub thumbnail: String,
}

/// Read access shared by both user shapes, used by the renderers.
pub trait UserView {
    /// `"First Last"`, or `None` when the name group was not returned.
    fn display_name(&self) -> Option<String>;
    fn email(&self) -> Option<&str>;
    fn thumbnail(&self) -> Option<&str>;
}

impl UserView for UserRecord {
    fn display_name(&self) -> Option<String> {
        self.name.as_ref().map(|n| format!("{} {}", n.first, n.last))
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn thumbnail(&self) -> Option<&str> {
        self.picture.as_ref().map(|p| p.thumbnail.as_str())
    }
}

impl UserView for UserSummary {
    fn display_name(&self) -> Option<String> {
        Some(format!("{} {}", self.name.first, self.name.last))
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn thumbnail(&self) -> Option<&str> {
        Some(&self.picture.thumbnail)
    }
}

/// Outer JSON object of every API response.
///
/// Only `results` is read; `info` and any other metadata are ignored.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn full_user() -> serde_json::Value {
        json!({
            "gender": "female",
            "name": { "title": "Ms", "first": "Ella", "last": "Jensen" },
            "location": {
                "street": { "number": 8929, "name": "Valwood Pkwy" },
                "city": "Billings",
                "state": "Michigan",
                "country": "United States",
                "postcode": 63104,
                "coordinates": { "latitude": "-69.8246", "longitude": "134.8719" },
                "timezone": { "offset": "+9:30", "description": "Adelaide, Darwin" }
            },
            "email": "ella.jensen@example.com",
            "login": {
                "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00",
                "username": "yellowpeacock117",
                "password": "addison",
                "salt": "sld1yGtd",
                "md5": "ca4b2d7c5f6bba3dd4ee8e26fc1a9cf5",
                "sha1": "9bd25a11ab2ab3bd8ecd4b9c6e9ad6a7c3c1ed8c",
                "sha256": "2b1b0a6ff7c6bb5df8b1bfc0a4f6b3a6d7a1e0c8f6d5b7c9a8e3f2d1c0b9a8e7"
            },
            "dob": { "date": "1992-03-08T15:13:16.688Z", "age": 30 },
            "registered": { "date": "2007-07-09T05:51:59.390Z", "age": 14 },
            "phone": "(272) 790-0888",
            "cell": "(489) 330-2385",
            "id": { "name": "SSN", "value": "405-88-3636" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/75.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
            },
            "nat": "US"
        })
    }

    #[test]
    fn decodes_full_record() {
        let user: UserRecord = serde_json::from_value(full_user()).unwrap();
        assert_eq!(user.gender.as_deref(), Some("female"));
        assert_eq!(user.name.as_ref().unwrap().title, "Ms");
        let location = user.location.as_ref().unwrap();
        assert_eq!(location.street.number, 8929);
        assert_eq!(location.postcode, Postcode::Number(63104));
        assert_eq!(user.dob.as_ref().unwrap().age, 30);
        assert_eq!(user.id.as_ref().unwrap().value.as_deref(), Some("405-88-3636"));
        assert_eq!(user.nat.as_deref(), Some("US"));
    }

    #[test]
    fn unmodelled_keys_survive_reserialization() {
        let user: UserRecord = serde_json::from_value(full_user()).unwrap();
        let location = user.location.as_ref().unwrap();
        assert!(location.extra.contains_key("coordinates"));
        assert!(location.extra.contains_key("timezone"));
        assert_eq!(user.login.as_ref().unwrap().extra["salt"], json!("sld1yGtd"));

        assert_eq!(serde_json::to_value(&user).unwrap(), full_user());
    }

    #[test]
    fn unknown_top_level_group_is_kept() {
        let mut value = full_user();
        value["nickname"] = json!({ "short": "El" });
        let user: UserRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(user.extra["nickname"], json!({ "short": "El" }));
        assert_eq!(serde_json::to_value(&user).unwrap(), value);
    }

    #[test]
    fn postcode_accepts_text() {
        let mut value = full_user();
        value["location"]["postcode"] = json!("EC1 4QN");
        let user: UserRecord = serde_json::from_value(value).unwrap();
        let postcode = &user.location.unwrap().postcode;
        assert_eq!(postcode, &Postcode::Text("EC1 4QN".to_string()));
        assert_eq!(postcode.to_string(), "EC1 4QN");
    }

    #[test]
    fn national_id_value_may_be_null_or_missing() {
        let mut value = full_user();
        value["id"] = json!({ "name": "", "value": null });
        let user: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(user.id.unwrap().value, None);

        let id: NationalId = serde_json::from_value(json!({ "name": "TFN" })).unwrap();
        assert_eq!(id.value, None);
    }

    #[test]
    fn partial_record_from_field_selector() {
        let value = json!({
            "name": { "title": "Mr", "first": "Noah", "last": "Roy" },
            "email": "noah.roy@example.com",
            "picture": { "large": "l", "medium": "m", "thumbnail": "t" }
        });
        let user: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(user.display_name().as_deref(), Some("Noah Roy"));
        assert_eq!(user.thumbnail(), Some("t"));
        assert!(user.location.is_none());
        assert!(user.login.is_none());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let mut value = full_user();
        value["dob"]["age"] = json!("thirty");
        assert!(serde_json::from_value::<UserRecord>(value).is_err());
    }

    #[test]
    fn serialization_skips_absent_groups() {
        let user = UserRecord {
            email: Some("a@example.com".to_string()),
            ..UserRecord::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "email": "a@example.com" }));
    }

    #[test]
    fn summary_requires_every_projected_field() {
        let ok = json!({
            "name": { "first": "Ella", "last": "Jensen" },
            "email": "ella@example.com",
            "picture": { "thumbnail": "t.jpg" }
        });
        let summary: UserSummary = serde_json::from_value(ok).unwrap();
        assert_eq!(summary.display_name().as_deref(), Some("Ella Jensen"));
        assert_eq!(summary.email(), Some("ella@example.com"));

        let missing_email = json!({
            "name": { "first": "Ella", "last": "Jensen" },
            "picture": { "thumbnail": "t.jpg" }
        });
        assert!(serde_json::from_value::<UserSummary>(missing_email).is_err());
    }

    #[test]
    fn summary_decodes_from_full_record_json() {
        let summary: UserSummary = serde_json::from_value(full_user()).unwrap();
        assert_eq!(summary.name.first, "Ella");
        assert_eq!(
            summary.picture.thumbnail,
            "https://randomuser.me/api/portraits/thumb/women/75.jpg"
        );
    }

    #[test]
    fn envelope_ignores_info_block() {
        let body = json!({
            "results": [full_user()],
            "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
        });
        let envelope: Envelope<UserRecord> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.results.len(), 1);
    }

    #[test]
    fn envelope_without_results_is_rejected() {
        let body = json!({ "error": "Uh oh, something has gone wrong." });
        assert!(serde_json::from_value::<Envelope<UserRecord>>(body).is_err());
    }
}
