//! Named layer registry
//!
//! Maps symbolic layer names to indices the way an engine backend would.
//! Layer 0 is always "Default".

/// Registry of named layers
#[derive(Debug, Clone)]
pub struct LayerMask {
    names: Vec<String>,
}

impl LayerMask {
    /// Register a layer, returning its index. Re-registering an existing
    /// name returns the original index.
    pub fn add_layer(&mut self, name: impl Into<String>) -> u32 {
        let name = name.into();
        if let Some(index) = self.name_to_layer(&name) {
            return index;
        }
        self.names.push(name);
        (self.names.len() - 1) as u32
    }

    /// Look up a layer index by name. Literal match only.
    pub fn name_to_layer(&self, name: &str) -> Option<u32> {
        self.names.iter().position(|n| n == name).map(|i| i as u32)
    }

    /// Look up a layer name by index
    pub fn layer_to_name(&self, layer: u32) -> Option<&str> {
        self.names.get(layer as usize).map(String::as_str)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self {
            names: vec!["Default".to_string()],
        }
    }
}
