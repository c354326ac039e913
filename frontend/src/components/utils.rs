use gloo_file::File as GlooFile;
use web_sys::FileList;

/// First `image/*` entry of a drop or paste. When there is none, the error
/// carries the name of the first file that was skipped.
pub fn first_image_file(file_list: &FileList) -> Result<GlooFile, Option<String>> {
    let mut skipped = None;
    for file in (0..file_list.length()).filter_map(|i| file_list.item(i)) {
        if file.type_().starts_with("image/") {
            return Ok(GlooFile::from(file));
        }
        skipped.get_or_insert_with(|| file.name());
    }
    Err(skipped)
}
