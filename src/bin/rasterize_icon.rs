use std::fs;

fn main() {
    // Read SVG
    let svg_data = fs::read("assets/icon.svg").expect("Failed to read assets/icon.svg");

    // Parse SVG
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(&svg_data, &opts).expect("Failed to parse SVG");

    // Render at 256x256 for window icon
    let size = 256;
    let mut pixmap = tiny_skia::Pixmap::new(size, size).expect("Failed to allocate pixmap");

    // Calculate scale to fit SVG into the target size
    let svg_size = tree.size();
    let scale_x = size as f32 / svg_size.width();
    let scale_y = size as f32 / svg_size.height();
    let scale = scale_x.min(scale_y); // Maintain aspect ratio

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png("assets/icon.png")
        .expect("Failed to save PNG");

    println!("Generated assets/icon.png (256x256)");
}
