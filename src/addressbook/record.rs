use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, Phone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact. The name is fixed at creation; phones keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Duplicates are accepted.
    pub fn add_phone(&mut self, phone: &str) -> Result<String> {
        self.phones.push(Phone::parse(phone)?);
        Ok(format!("Phone {} added to contact {}", phone, self.name))
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<String> {
        let pos = self.position_of(phone)?;
        self.phones.remove(pos);
        Ok(format!("Phone {} removed from contact {}", phone, self.name))
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<String> {
        let replacement = Phone::parse(new)?;
        let pos = self.position_of(old)?;
        self.phones[pos] = replacement;
        Ok(format!(
            "Phone {} changed to {} for contact {}",
            old, new, self.name
        ))
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn add_birthday(&mut self, value: &str) -> Result<String> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(format!("Birthday added to contact {}", self.name))
    }

    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("Birthday of contact {}: {}", self.name, birthday),
            None => format!("Birthday for contact {} is not set", self.name),
        }
    }

    fn position_of(&self, phone: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                phone: phone.to_string(),
                contact: self.name.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Joined with ": ", not ", ".
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact: {}, phones: {}", self.name, phones.join(": "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
