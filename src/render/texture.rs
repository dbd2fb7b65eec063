//! Texture-Utilities für wgpu.

use image::DynamicImage;

/// GPU-Texture des Hintergrundbilds samt View und Sampler.
pub struct ImageTexture {
    /// Die Texture selbst (muss für die Lebensdauer der View gehalten werden)
    pub texture: wgpu::Texture,
    /// View für die Bind-Group
    pub view: wgpu::TextureView,
    /// Linearer Sampler mit Clamp-to-Edge
    pub sampler: wgpu::Sampler,
}

impl ImageTexture {
    /// Erstellt eine wgpu-Texture aus einem DynamicImage
    ///
    /// Das Bild wird zu RGBA8 konvertiert und als Mip-Level 0 hochgeladen.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DynamicImage,
        label: &str,
    ) -> Self {
        let rgba_image = image.to_rgba8();
        let (width, height) = rgba_image.dimensions();

        log::debug!(
            "Erstelle wgpu-Texture '{}': {}x{} Pixel, {} Bytes",
            label,
            width,
            height,
            rgba_image.len()
        );

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            &rgba_image,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{}_sampler", label)),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}
