//! Field formatter that wraps stored images in a span.

use serde::{Deserialize, Serialize};
use site_support::{Element, Entity, EntityStorage};

/// One stored image-field item: a reference to a file entity plus the
/// editor-supplied alt and title texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub target_id: Option<u64>,
    pub alt: Option<String>,
    pub title: Option<String>,
}

/// Wraps each image in a `span.custom-image-wrapper` around an
/// `img.img_custom`.
pub struct ImgWrapperFormatter<S> {
    storage: S,
}

impl<S: EntityStorage> ImgWrapperFormatter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Build display elements for the field's items.
    ///
    /// Items without a target, or whose target does not resolve to a file
    /// entity, produce no element.
    pub fn view_elements(&self, items: &[ImageItem]) -> Vec<Element> {
        let mut elements = Vec::new();

        for item in items {
            let Some(target_id) = item.target_id else {
                continue;
            };
            let Some(entity) = self.storage.load(target_id) else {
                continue;
            };
            let Entity::File(file) = entity else {
                continue;
            };

            let image = Element::new("img")
                .class("img_custom")
                .attr("src", &file.uri)
                .attr("alt", item.alt.as_deref().unwrap_or(""))
                .attr("title", item.title.as_deref().unwrap_or(""));

            elements.push(
                Element::new("span")
                    .class("custom-image-wrapper")
                    .child(image),
            );
        }

        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_support::{FileEntity, MemoryStorage, Node};

    fn storage_with_logo() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        storage.insert(
            10,
            Entity::File(FileEntity {
                fid: 10,
                uri: "public://logo.png".to_string(),
            }),
        );
        storage
    }

    #[test]
    fn test_wraps_resolvable_image() {
        let formatter = ImgWrapperFormatter::new(storage_with_logo());
        let items = [ImageItem {
            target_id: Some(10),
            alt: Some("Site logo".to_string()),
            title: None,
        }];

        let elements = formatter.view_elements(&items);
        assert_eq!(elements.len(), 1);

        let wrapper = &elements[0];
        assert_eq!(wrapper.tag(), "span");
        assert_eq!(wrapper.attribute("class"), Some("custom-image-wrapper"));

        let image = &wrapper.children()[0];
        assert_eq!(image.tag(), "img");
        assert_eq!(image.attribute("class"), Some("img_custom"));
        assert_eq!(image.attribute("src"), Some("public://logo.png"));
        assert_eq!(image.attribute("alt"), Some("Site logo"));
        assert_eq!(image.attribute("title"), Some(""));
    }

    #[test]
    fn test_renders_expected_markup() {
        let formatter = ImgWrapperFormatter::new(storage_with_logo());
        let items = [ImageItem {
            target_id: Some(10),
            alt: Some("Site logo".to_string()),
            title: Some("Logo".to_string()),
        }];

        let html = formatter.view_elements(&items)[0].to_html();
        assert_eq!(
            html,
            r#"<span class="custom-image-wrapper"><img alt="Site logo" class="img_custom" src="public://logo.png" title="Logo"></span>"#
        );
    }

    #[test]
    fn test_skips_items_without_target() {
        let formatter = ImgWrapperFormatter::new(storage_with_logo());
        let items = [ImageItem::default()];

        assert!(formatter.view_elements(&items).is_empty());
    }

    #[test]
    fn test_skips_unresolvable_target() {
        let formatter = ImgWrapperFormatter::new(storage_with_logo());
        let items = [ImageItem {
            target_id: Some(99),
            ..ImageItem::default()
        }];

        assert!(formatter.view_elements(&items).is_empty());
    }

    #[test]
    fn test_skips_non_file_entity() {
        let mut storage = MemoryStorage::new();
        storage.insert(5, Entity::Node(Node::new(5)));
        let formatter = ImgWrapperFormatter::new(storage);
        let items = [ImageItem {
            target_id: Some(5),
            ..ImageItem::default()
        }];

        assert!(formatter.view_elements(&items).is_empty());
    }

    #[test]
    fn test_keeps_item_order() {
        let mut storage = storage_with_logo();
        storage.insert(
            11,
            Entity::File(FileEntity {
                fid: 11,
                uri: "public://banner.jpg".to_string(),
            }),
        );
        let formatter = ImgWrapperFormatter::new(storage);

        let items = [
            ImageItem {
                target_id: Some(11),
                ..ImageItem::default()
            },
            ImageItem::default(),
            ImageItem {
                target_id: Some(10),
                ..ImageItem::default()
            },
        ];

        let elements = formatter.view_elements(&items);
        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements[0].children()[0].attribute("src"),
            Some("public://banner.jpg")
        );
        assert_eq!(
            elements[1].children()[0].attribute("src"),
            Some("public://logo.png")
        );
    }
}
