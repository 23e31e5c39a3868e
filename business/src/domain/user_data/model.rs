/// Contact and delivery details collected by the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    pub address: String,
    pub delivery_method: String,
    pub email: String,
    pub phone: String,
}

/// One editable field of [`UserData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Address,
    DeliveryMethod,
    Email,
    Phone,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::Address,
        UserField::DeliveryMethod,
        UserField::Email,
        UserField::Phone,
    ];
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserField::Address => write!(f, "address"),
            UserField::DeliveryMethod => write!(f, "delivery_method"),
            UserField::Email => write!(f, "email"),
            UserField::Phone => write!(f, "phone"),
        }
    }
}

impl std::str::FromStr for UserField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(UserField::Address),
            "delivery_method" | "payment" => Ok(UserField::DeliveryMethod),
            "email" => Ok(UserField::Email),
            "phone" => Ok(UserField::Phone),
            _ => Err(format!("Invalid user field: {}", s)),
        }
    }
}

impl UserData {
    pub fn new(
        address: impl Into<String>,
        delivery_method: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            delivery_method: delivery_method.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True iff every field is non-empty. This alone gates order submission.
    pub fn is_valid(&self) -> bool {
        UserField::ALL.iter().all(|field| !self.get(*field).is_empty())
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Address => &self.address,
            UserField::DeliveryMethod => &self.delivery_method,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::Address => self.address = value,
            UserField::DeliveryMethod => self.delivery_method = value,
            UserField::Email => self.email = value,
            UserField::Phone => self.phone = value,
        }
    }

    /// Fields still empty, in form order.
    pub fn missing_fields(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}
