//! Profile details for the account screen

/// Contact details shown and edited on the profile screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            phone: "+91 9876543210".to_string(),
            address: "123 Main Street, Koramangala, Bengaluru".to_string(),
        }
    }
}

impl UserProfile {
    /// Initials used for the avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.name, self.email, self.phone, self.address
        )
    }
}
