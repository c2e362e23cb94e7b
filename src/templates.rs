use minijinja::Environment;

pub fn load_env() -> Environment<'static> {
    let mut env = Environment::new();
    minijinja_embed::load_templates!(&mut env);
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::Post;
    use minijinja::context;

    fn render(path: &str, values: minijinja::Value) -> String {
        let env = load_env();
        let tmpl = env.get_template(path).unwrap();
        tmpl.render(values).unwrap()
    }

    #[test]
    fn home_renders_empty_post_list() {
        let page = render(
            "home.html",
            context! { intro => "Welcome aboard", posts => Vec::<Post>::new(), env => "debug" },
        );
        assert!(page.contains("Welcome aboard"));
    }

    #[test]
    fn home_lists_posts_with_links() {
        let posts = vec![Post {
            post_id: 1,
            title: "Test Post".to_owned(),
            content: "Hello".to_owned(),
        }];
        let page = render(
            "home.html",
            context! { intro => "intro", posts, env => "debug" },
        );
        assert!(page.contains("Test Post"));
        assert!(page.contains("/posts/Test%20Post"));
    }

    #[test]
    fn post_page_shows_title_and_content() {
        let post = Post {
            post_id: 7,
            title: "Hello World".to_owned(),
            content: "first post".to_owned(),
        };
        let page = render("post.html", context! { post, env => "debug" });
        assert!(page.contains("Hello World"));
        assert!(page.contains("first post"));
    }

    #[test]
    fn compose_form_carries_the_expected_field_names() {
        let page = render("compose.html", context! { env => "debug" });
        assert!(page.contains("postTitle"));
        assert!(page.contains("postBody"));
    }
}
