use log::{debug, error};

/// Parses a comma separated list of integers, e.g. `10,20,30`.
/// Whitespace around the items is ignored and an empty string is the empty sequence.
pub fn parse_items(items: &str) -> crate::Result<Vec<i64>> {
    debug!("Parsing items from {:?}", items);

    if items.trim().is_empty() {
        return Ok(Vec::new());
    }

    items
        .split(',')
        .map(|item| {
            if item.trim().is_empty() {
                error!("Found an empty item in {:?}", items);
                return Err(crate::ErrorKind::Parameter.into());
            }
            item.trim().parse::<i64>().map_err(|e| {
                error!("Item {:?} is not an integer", item);
                crate::Error::from(e)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_items;

    #[test]
    fn test_parse_items() {
        assert_eq!(parse_items("10,20,30").unwrap(), vec![10, 20, 30]);
        assert_eq!(parse_items(" 1 , -2 ").unwrap(), vec![1, -2]);
        assert_eq!(parse_items("").unwrap(), Vec::<i64>::new());
        assert!(parse_items("1,x").is_err());
        assert!(parse_items("1,,2").is_err());
    }
}
