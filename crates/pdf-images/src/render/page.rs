//! Output page construction

use crate::constants::mm_to_pt;
use crate::layout::{PlacedImage, Size};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Name under which each page refers to its image
const IMAGE_RESOURCE: &str = "Im0";

/// Render a page holding a single image.
///
/// `placed` is in top-left millimeters; the content stream works in PDF
/// user space (points, origin bottom-left), so the y axis is flipped here.
pub(crate) fn render_image_page(
    output: &mut Document,
    parent_pages_id: ObjectId,
    page_size_mm: Size,
    image_id: ObjectId,
    placed: &PlacedImage,
) -> ObjectId {
    let page_width_pt = mm_to_pt(page_size_mm.width);
    let page_height_pt = mm_to_pt(page_size_mm.height);

    let width_pt = mm_to_pt(placed.width_mm);
    let height_pt = mm_to_pt(placed.height_mm);
    let x_pt = mm_to_pt(placed.x_mm);
    let y_pt = page_height_pt - mm_to_pt(placed.y_mm) - height_pt;

    let content = format!(
        "q {:.4} 0 0 {:.4} {:.4} {:.4} cm /{} Do Q\n",
        width_pt, height_pt, x_pt, y_pt, IMAGE_RESOURCE
    );
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set("Contents", Object::Reference(content_id));

    output.add_object(page_dict)
}

/// Pages tree that grows strictly in append order
pub(crate) struct PageTree {
    pub id: ObjectId,
    kids: Vec<Object>,
}

impl PageTree {
    pub fn new(output: &mut Document) -> Self {
        Self {
            id: output.new_object_id(),
            kids: Vec::new(),
        }
    }

    pub fn push(&mut self, page_id: ObjectId) {
        self.kids.push(Object::Reference(page_id));
    }

    pub fn len(&self) -> usize {
        self.kids.len()
    }

    /// Write the Pages node and the catalog, making `output` a complete document
    pub fn finish(self, output: &mut Document) {
        let count = self.kids.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.kids)),
            ("Count", Object::Integer(count)),
        ]);
        output
            .objects
            .insert(self.id, Object::Dictionary(pages_dict));

        let catalog_id = output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.id)),
        ]));
        output.trailer.set("Root", catalog_id);
    }
}
