mod question_dto;
