/// Optional pagination parameters for [`AccountsClient::list`].
///
/// Each parameter is independently settable; absent parameters are omitted
/// from the query string entirely rather than encoded as empty.
///
/// [`AccountsClient::list`]: crate::AccountsClient::list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Zero-based page index, sent as `page[number]`.
    pub page_number: Option<u32>,
    /// Records per page, sent as `page[size]`.
    pub page_size: Option<u32>,
}

impl ListParams {
    /// Builds parameters with nothing set; the server applies its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page index.
    pub fn page_number(mut self, number: u32) -> Self {
        self.page_number = Some(number);
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub(crate) fn to_pairs(self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(number) = self.page_number {
            pairs.push(("page[number]", number.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page[size]", size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::ListParams;

    #[test]
    fn unset_parameters_produce_no_pairs() {
        assert!(ListParams::new().to_pairs().is_empty());
    }

    #[test]
    fn size_only_produces_just_the_size_pair() {
        let pairs = ListParams::new().page_size(25).to_pairs();
        assert_eq!(pairs, vec![("page[size]", "25".to_owned())]);
    }

    #[test]
    fn both_parameters_keep_number_before_size() {
        let pairs = ListParams::new().page_number(0).page_size(2).to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page[number]", "0".to_owned()),
                ("page[size]", "2".to_owned()),
            ]
        );
    }
}
