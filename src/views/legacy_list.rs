use crate::models::Restaurant;
use crate::views::markup::escape_html;

/// `<li><b>name</b> - cuisine <br> address</li>`; missing fields render empty
pub fn render_legacy_item(restaurant: &Restaurant) -> String {
    format!(
        "<li><b>{}</b> - {} <br> {}</li>",
        escape_html(&restaurant.name),
        escape_html(restaurant.cuisine().unwrap_or_default()),
        escape_html(restaurant.address().unwrap_or_default()),
    )
}

pub fn render_legacy_items(restaurants: &[Restaurant]) -> String {
    restaurants.iter().map(render_legacy_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_line_per_restaurant() {
        let list = vec![
            Restaurant {
                id: 1,
                name: "Noodle Bar".into(),
                cuisine: Some("Asian".into()),
                address: Some("9 Main St".into()),
                photo: None,
            },
            Restaurant {
                id: 2,
                name: "Mystery".into(),
                cuisine: None,
                address: None,
                photo: None,
            },
        ];

        assert_eq!(
            render_legacy_items(&list),
            "<li><b>Noodle Bar</b> - Asian <br> 9 Main St</li><li><b>Mystery</b> -  <br> </li>"
        );
    }
}
