pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_counts() {
        let h = types::Health { status: "Healthy", menu_items_count: 2, tasks_count: 1 };
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["status"], "Healthy");
        assert_eq!(v["menu_items_count"], 2);
        assert_eq!(v["tasks_count"], 1);
    }

    #[test]
    fn message_body_shape() {
        let m = types::Message::new("Task deleted successfully");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Task deleted successfully"}));
    }
}
