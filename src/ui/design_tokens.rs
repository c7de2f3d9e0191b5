// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the toast severity colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (toast pill and card geometry)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation distances

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent shadow color
let shadow = Color {
    a: opacity::SHADOW_SOFT,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast severity colors (system palette)
    pub const GREEN: Color = Color::from_rgb(0.204, 0.780, 0.349);
    pub const ORANGE: Color = Color::from_rgb(1.0, 0.584, 0.0);
    pub const RED: Color = Color::from_rgb(1.0, 0.231, 0.188);
    pub const CYAN: Color = Color::from_rgb(0.196, 0.678, 0.902);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Drop shadow under the pill toast.
    pub const SHADOW_SOFT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 14.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 30.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Height of the compact pill toast.
    pub const TOAST_PILL_HEIGHT: f32 = 46.0;
    /// Height of the card toast.
    pub const TOAST_CARD_HEIGHT: f32 = 55.0;
    /// Gap between the card text column and its dismiss affordance.
    pub const TOAST_CARD_TRAILING_GAP: f32 = 40.0;

    // Component widths
    pub const SHOWCASE_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Large headings and toast card titles
    //! - Body: Primary content text and toast messages

    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Small title - Toast card title
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - List rows
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Toast message text
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, secondary info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Toast card corners.
    pub const CARD: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft drop shadow used by the pill toast.
    pub const PILL: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW_SOFT,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 5.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Distance a sliding toast travels from its anchor edge.
    pub const SLIDE_DISTANCE: f32 = 24.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::SHADOW_SOFT > 0.0 && opacity::SHADOW_SOFT < 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_CARD_HEIGHT > sizing::TOAST_PILL_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::FULL > sizing::TOAST_PILL_HEIGHT);
};
