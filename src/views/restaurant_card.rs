// ============================================================================
// RESTAURANT CARD - Restaurant -> markup fragment (pure)
// ============================================================================

use crate::config::AppConfig;
use crate::models::Restaurant;
use crate::utils::FAVORITE_ID_ATTR;
use crate::views::markup::escape_html;

/// Render one card of the search grid
pub fn render_restaurant_card(restaurant: &Restaurant, config: &AppConfig) -> String {
    let name = escape_html(&restaurant.name);

    let image = match restaurant.photo() {
        Some(photo) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(photo),
            name
        ),
        None => concat!(
            r#"<div class="placeholder-image">"#,
            r#"<span class="placeholder-icon">🍴</span>"#,
            r#"<span>No Image</span>"#,
            r#"</div>"#
        )
        .to_string(),
    };

    let cuisine_tag = restaurant
        .cuisine()
        .map(|c| format!(r#"<span class="cuisine-tag">{}</span>"#, escape_html(c)))
        .unwrap_or_default();

    let address_line = restaurant
        .address()
        .map(|a| format!(r#"<p class="address">{}</p>"#, escape_html(a)))
        .unwrap_or_default();

    format!(
        r#"<div class="restaurant-card">
    <div class="card-image">{image}</div>
    <div class="card-content">
        <div class="card-header">
            <h3 class="restaurant-name">{name}</h3>{cuisine_tag}
        </div>
        <div class="restaurant-info">{address_line}</div>
        <div class="card-actions">
            <a href="{menu}" class="btn-primary">View Menu</a>
            <button type="button" class="btn-secondary" {attr}="{id}">❤️ Favorite</button>
        </div>
    </div>
</div>"#,
        image = image,
        name = name,
        cuisine_tag = cuisine_tag,
        address_line = address_line,
        menu = escape_html(&config.menu_path(restaurant.id)),
        attr = FAVORITE_ID_ATTR,
        id = restaurant.id,
    )
}

/// Whole grid content, cards in server order
pub fn render_restaurant_cards(restaurants: &[Restaurant], config: &AppConfig) -> String {
    restaurants
        .iter()
        .map(|r| render_restaurant_card(r, config))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(id: i64, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            cuisine: None,
            address: None,
            photo: None,
        }
    }

    #[test]
    fn card_without_optional_fields_shows_placeholder_and_name_only() {
        let html = render_restaurant_card(&bare(7, "Plain Diner"), &AppConfig::default());

        assert!(html.contains(r#"class="placeholder-image""#));
        assert!(html.contains("No Image"));
        assert!(html.contains(r#"<h3 class="restaurant-name">Plain Diner</h3>"#));
        assert!(!html.contains("cuisine-tag"));
        assert!(!html.contains(r#"class="address""#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn full_card_has_photo_cuisine_address_and_actions() {
        let restaurant = Restaurant {
            id: 12,
            name: "Trattoria".into(),
            cuisine: Some("Italian".into()),
            address: Some("5 Via Roma".into()),
            photo: Some("/media/t.jpg".into()),
        };
        let html = render_restaurant_card(&restaurant, &AppConfig::default());

        assert!(html.contains(r#"<img src="/media/t.jpg" alt="Trattoria">"#));
        assert!(html.contains(r#"<span class="cuisine-tag">Italian</span>"#));
        assert!(html.contains(r#"<p class="address">5 Via Roma</p>"#));
        assert!(html.contains(r#"href="/restaurant/12/menu/""#));
        assert!(html.contains("View Menu"));
        assert!(html.contains(r#"data-favorite-id="12""#));
        assert!(!html.contains("placeholder-image"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_restaurant_card(&bare(1, "<script>x</script>"), &AppConfig::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn cards_keep_server_order() {
        let list = vec![bare(3, "Charlie"), bare(1, "Alpha"), bare(2, "Bravo")];
        let html = render_restaurant_cards(&list, &AppConfig::default());

        let c = html.find("Charlie").unwrap();
        let a = html.find("Alpha").unwrap();
        let b = html.find("Bravo").unwrap();
        assert!(c < a && a < b);
        assert_eq!(html.matches(r#"class="restaurant-card""#).count(), 3);
    }
}
