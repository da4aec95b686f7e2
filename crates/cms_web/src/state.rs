use cms_notion::repository::ArticleRepository;

pub struct AppState {
    pub repository: ArticleRepository,
}
