/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub phone_number: Option<Vec<String>>,
}

/// A user record before the database assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub phone_number: Option<Vec<String>>,
}

#[cfg(test)]
impl NewUser {
    /// The row a store would hand back after assigning `id`.
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            address_street: self.address_street,
            address_city: self.address_city,
            address_state: self.address_state,
            address_zip: self.address_zip,
            phone_number: self.phone_number,
        }
    }
}

/// The demonstration row inserted by the seed job.
pub fn demo_user() -> NewUser {
    NewUser {
        first_name: "John".into(),
        last_name: "Doe".into(),
        address_street: Some("21 2nd Street".into()),
        address_city: Some("New York".into()),
        address_state: Some("NY".into()),
        address_zip: Some("10021".into()),
        phone_number: Some(vec!["212 555-1234".into(), "646 555-4567".into()]),
    }
}
