//! Default page lookup across translations

use portalkit_core::TranslatableItem;

/// Pick the translated default page of `obj`, if one is available
///
/// When `obj` is not itself a translation and its child `page` has a
/// translation whose id is among `ids`, that id is returned. Otherwise
/// `page` comes back unchanged.
pub fn lookup_translation_id<T, S>(obj: &T, page: &str, ids: &[S]) -> String
where
    T: TranslatableItem + ?Sized,
    S: AsRef<str>,
{
    if !obj.is_translation() {
        if let Some(translated) = obj.child_translation_id(page) {
            if ids.iter().any(|id| id.as_ref() == translated) {
                return translated;
            }
        }
    }
    page.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Folder {
        translation: bool,
    }

    impl TranslatableItem for Folder {
        fn is_translation(&self) -> bool {
            self.translation
        }

        fn child_translation_id(&self, page: &str) -> Option<String> {
            (page == "index_html").then(|| "index_html-de".to_string())
        }
    }

    #[test]
    fn test_translation_found() {
        let folder = Folder { translation: false };
        let ids = ["index_html", "index_html-de"];
        assert_eq!(lookup_translation_id(&folder, "index_html", &ids), "index_html-de");
    }

    #[test]
    fn test_translation_not_in_ids() {
        let folder = Folder { translation: false };
        let ids = ["index_html"];
        assert_eq!(lookup_translation_id(&folder, "index_html", &ids), "index_html");
    }

    #[test]
    fn test_no_translation_for_page() {
        let folder = Folder { translation: false };
        let ids = vec!["front".to_string()];
        assert_eq!(lookup_translation_id(&folder, "front", &ids), "front");
    }

    #[test]
    fn test_translated_container_keeps_page() {
        let folder = Folder { translation: true };
        let ids = ["index_html-de"];
        assert_eq!(lookup_translation_id(&folder, "index_html", &ids), "index_html");
    }
}
