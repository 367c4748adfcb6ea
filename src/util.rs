use hashbrown::HashMap;

lazy_static! {
    /// Named constants, keyed by lower-case identifier. An identifier found
    /// here is lexed as a number instead of a function name.
    pub static ref CONSTANTS: HashMap<&'static str, f64> = {
        let mut map = HashMap::<&'static str, f64>::new();
        map.insert("pi", std::f64::consts::PI);
        map.insert("e", std::f64::consts::E);
        map.insert("tau", 2.0 * std::f64::consts::PI);
        map.shrink_to_fit();
        map
    };
}

/// Look up the constant named `name`, which must already be lower-cased
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::constant;

    #[test]
    fn constants() {
        assert_eq!(constant("pi"), Some(std::f64::consts::PI));
        assert_eq!(constant("e"), Some(std::f64::consts::E));
        assert_eq!(constant("PI"), None);
        assert_eq!(constant("sin"), None);
    }
}
