use crate::domain::errors::DomainError;

/// Permission level an operation demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Read,
    Write,
}

impl Role {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            _ => None,
        }
    }
}

/// Roles granted to the caller of one request. Write implies Read; the empty
/// set is an anonymous caller and allows nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSet {
    read: bool,
    write: bool,
}

impl RoleSet {
    pub const fn anonymous() -> Self {
        Self {
            read: false,
            write: false,
        }
    }

    pub const fn read_only() -> Self {
        Self {
            read: true,
            write: false,
        }
    }

    pub const fn read_write() -> Self {
        Self {
            read: true,
            write: true,
        }
    }

    pub fn grant(&mut self, role: Role) {
        match role {
            Role::Read => self.read = true,
            Role::Write => self.write = true,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        match role {
            Role::Read => self.read || self.write,
            Role::Write => self.write,
        }
    }

    pub fn require(&self, role: Role) -> Result<(), DomainError> {
        if self.allows(role) {
            Ok(())
        } else {
            Err(DomainError::forbidden(match role {
                Role::Read => "read access is required",
                Role::Write => "write access is required",
            }))
        }
    }
}
