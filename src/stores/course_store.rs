use crate::models::{Course, CourseStatus, NewCourse};

/// Single source of truth for the course list shown in the admin panel.
#[derive(Clone, PartialEq, Debug)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    next_id: i64,
}

impl CourseCatalog {
    pub fn seeded() -> Self {
        let courses = vec![
            Course {
                id: 1,
                title: "Maths for Beginners".to_string(),
                instructor: "Shanti Nelapu".to_string(),
                students: 45,
                lessons: 12,
                status: CourseStatus::Active,
                category: "Science".to_string(),
                duration: "8 weeks".to_string(),
            },
            Course {
                id: 2,
                title: "Programming Fundamentals".to_string(),
                instructor: "Shanti Nelapu".to_string(),
                students: 67,
                lessons: 15,
                status: CourseStatus::Active,
                category: "Programming".to_string(),
                duration: "6 weeks".to_string(),
            },
            Course {
                id: 3,
                title: "Physics for everyone".to_string(),
                instructor: "Prabhav Sharma".to_string(),
                students: 23,
                lessons: 10,
                status: CourseStatus::Draft,
                category: "Science".to_string(),
                duration: "4 weeks".to_string(),
            },
            Course {
                id: 4,
                title: "Economics 101".to_string(),
                instructor: "Prabhav Sharma".to_string(),
                students: 34,
                lessons: 18,
                status: CourseStatus::Active,
                category: "Arts".to_string(),
                duration: "10 weeks".to_string(),
            },
        ];
        Self {
            courses,
            next_id: 5,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Validate and append a new course. New courses start with zero
    /// enrollments.
    pub fn add(&mut self, draft: NewCourse) -> Result<Course, String> {
        if draft.title.trim().is_empty() || draft.instructor.trim().is_empty() {
            return Err("Please fill all required fields.".to_string());
        }

        let course = Course {
            id: self.next_id,
            title: draft.title.trim().to_string(),
            instructor: draft.instructor.trim().to_string(),
            students: 0,
            lessons: draft.lessons,
            status: draft.status,
            category: draft.category.trim().to_string(),
            duration: draft.duration.trim().to_string(),
        };
        self.next_id += 1;
        self.courses.push(course.clone());
        Ok(course)
    }

    pub fn remove(&mut self, id: i64) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        Some(self.courses.remove(index))
    }

    /// Case-insensitive search over title, instructor and category.
    pub fn filter(&self, term: &str) -> Vec<&Course> {
        let needle = term.to_lowercase();
        self.courses
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.instructor.to_lowercase().contains(&needle)
                    || c.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn count_with_status(&self, status: CourseStatus) -> usize {
        self.courses.iter().filter(|c| c.status == status).count()
    }

    pub fn total_students(&self) -> u32 {
        self.courses.iter().map(|c| c.students).sum()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, instructor: &str) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            instructor: instructor.to_string(),
            category: "Science".to_string(),
            duration: "4 weeks".to_string(),
            lessons: 8,
            status: CourseStatus::Active,
        }
    }

    #[test]
    fn valid_add_grows_the_list_by_exactly_one() {
        let mut catalog = CourseCatalog::seeded();
        let before = catalog.len();

        let course = catalog.add(draft("Chemistry Basics", "Noor Amiri")).unwrap();

        assert_eq!(catalog.len(), before + 1);
        assert_eq!(course.students, 0);
        assert_eq!(course.id, 5);
    }

    #[test]
    fn missing_title_or_instructor_is_rejected() {
        let mut catalog = CourseCatalog::seeded();
        let before = catalog.clone();

        assert!(catalog.add(draft("", "Someone")).is_err());
        assert!(catalog.add(draft("Untitled", " ")).is_err());
        assert_eq!(catalog, before);
    }

    #[test]
    fn remove_keeps_the_other_courses_in_order() {
        let mut catalog = CourseCatalog::seeded();
        let removed = catalog.remove(2).unwrap();

        assert_eq!(removed.title, "Programming Fundamentals");
        let ids: Vec<i64> = catalog.courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn filter_searches_title_instructor_and_category() {
        let catalog = CourseCatalog::seeded();
        assert_eq!(catalog.filter("maths").len(), 1);
        assert_eq!(catalog.filter("prabhav").len(), 2);
        assert_eq!(catalog.filter("SCIENCE").len(), 2);
        assert_eq!(catalog.filter("").len(), 4);
    }

    #[test]
    fn aggregates() {
        let catalog = CourseCatalog::seeded();
        assert_eq!(catalog.count_with_status(CourseStatus::Active), 3);
        assert_eq!(catalog.count_with_status(CourseStatus::Draft), 1);
        assert_eq!(catalog.total_students(), 169);
    }
}
