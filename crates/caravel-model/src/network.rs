use serde::{Deserialize, Serialize};

/// Network placement for launched tasks.
///
/// Passed explicitly at construction time so environments (and tests) can
/// differ, instead of baking a fixed subnet and security group into the
/// launch call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPlacement {
    pub subnets: Vec<String>,
    pub security_groups: Vec<String>,
    pub assign_public_ip: bool,
}

impl NetworkPlacement {
    /// Placement with a public IP assigned, the default for one-off tasks
    /// that need to pull images from a public registry.
    pub fn new(subnets: Vec<String>, security_groups: Vec<String>) -> Self {
        Self {
            subnets,
            security_groups,
            assign_public_ip: true,
        }
    }

    pub fn without_public_ip(mut self) -> Self {
        self.assign_public_ip = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_ip_is_enabled_by_default() {
        let placement = NetworkPlacement::new(vec!["subnet-1".into()], vec!["sg-1".into()]);
        assert!(placement.assign_public_ip);
    }

    #[test]
    fn public_ip_can_be_disabled() {
        let placement =
            NetworkPlacement::new(vec!["subnet-1".into()], vec![]).without_public_ip();
        assert!(!placement.assign_public_ip);
    }
}
